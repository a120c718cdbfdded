//! `perft` — a leaf-counting command line tool for validating move
//! generation against known-good node counts.

use clap::Parser;
use log::info;

use chess_core::Game;

/// Count legal-move tree leaves from a position to a fixed depth.
#[derive(Parser, Debug)]
#[command(name = "perft", version, about)]
struct Cli {
    /// FEN of the position to search from. Defaults to the starting position.
    #[arg(long, default_value = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")]
    fen: String,

    /// Search depth, in plies.
    #[arg(long, default_value_t = 5)]
    depth: u32,

    /// Print a per-move breakdown at the root (perft divide).
    #[arg(long)]
    divide: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let game = match Game::from_fen(&cli.fen) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid FEN: {err}");
            std::process::exit(1);
        }
    };

    info!("counting perft({}) from {}", cli.depth, cli.fen);

    if cli.divide {
        let mut total = 0u64;
        let mut breakdown = game.perft_divide(cli.depth);
        breakdown.sort_by(|a, b| a.0.to_algebraic().cmp(&b.0.to_algebraic()));
        for (mv, count) in &breakdown {
            println!("{mv}: {count}");
            total += count;
        }
        println!();
        println!("total: {total}");
    } else {
        println!("{}", game.perft(cli.depth));
    }
}
