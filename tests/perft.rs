//! Leaf-counting correctness tests against known node counts.
//!
//! Deep counts (depth ≥ 4 on a busy position) take real time; they are
//! marked `#[ignore]` so the default test run stays fast, and are run
//! explicitly with `cargo test -- --ignored`.

use chess_core::Game;

const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4_FEN: &str =
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RQ1 w kq - 0 1";
const POSITION_5_FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn starting_position_depth_one() {
    let game = Game::from_fen(STARTING_FEN).unwrap();
    assert_eq!(game.perft(1), 20);
}

#[test]
fn starting_position_depth_three() {
    let game = Game::from_fen(STARTING_FEN).unwrap();
    assert_eq!(game.perft(3), 8_902);
}

#[test]
#[ignore]
fn starting_position_depth_five() {
    let game = Game::from_fen(STARTING_FEN).unwrap();
    assert_eq!(game.perft(5), 4_865_609);
}

#[test]
#[ignore]
fn kiwipete_depth_four() {
    let game = Game::from_fen(KIWIPETE_FEN).unwrap();
    assert_eq!(game.perft(4), 4_085_603);
}

#[test]
#[ignore]
fn position_three_depth_five() {
    let game = Game::from_fen(POSITION_3_FEN).unwrap();
    assert_eq!(game.perft(5), 674_624);
}

#[test]
#[ignore]
fn position_four_depth_four() {
    let game = Game::from_fen(POSITION_4_FEN).unwrap();
    assert_eq!(game.perft(4), 422_333);
}

#[test]
fn position_five_depth_three() {
    let game = Game::from_fen(POSITION_5_FEN).unwrap();
    assert_eq!(game.perft(3), 62_379);
}

#[test]
fn perft_divide_sums_to_perft() {
    let game = Game::from_fen(STARTING_FEN).unwrap();
    let divide = game.perft_divide(3);
    let total: u64 = divide.iter().map(|(_, count)| count).sum();
    assert_eq!(total, game.perft(3));
    assert_eq!(divide.len(), 20);
}
