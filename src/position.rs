//! `Position` — board plus full game-state fields, the FEN codec, and the
//! make-move transition that produces the next `Position`.

use crate::board::{Board, CastlingRights};
use crate::chess_move::Move;
use crate::error::{Error, FenField};
use crate::piece::{Color, Piece, PieceKind};
use crate::square::Square;

/// A complete, immutable chess position.
///
/// `Position` values are produced by FEN parsing or by `make_move`; once
/// committed to a `Game`'s history they are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub turn: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_counter: u32,
    pub captures: Vec<Piece>,
}

impl Position {
    /// The standard starting position.
    pub fn starting() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_counter: 1,
            captures: Vec::new(),
        }
    }

    /// Parses a full 6-field FEN string:
    /// `<placement> <turn> <castling> <en passant> <halfmove> <fullmove>`.
    pub fn from_fen(fen: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = fen.split(' ').filter(|s| !s.is_empty()).collect();
        if fields.len() != 6 {
            return Err(Error::InvalidFen {
                field: FenField::Placement,
                detail: format!("expected 6 space-separated fields, got {}", fields.len()),
            });
        }

        let board = Board::from_placement(fields[0])?;

        let turn = Color::from_fen_char(
            fields[1].chars().next().ok_or_else(|| Error::InvalidFen {
                field: FenField::ActiveColor,
                detail: fields[1].to_string(),
            })?,
        )
        .ok_or_else(|| Error::InvalidFen {
            field: FenField::ActiveColor,
            detail: fields[1].to_string(),
        })?;

        let castling = CastlingRights::from_fen(fields[2])?;

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(Square::from_algebraic(fields[3]).map_err(|_| Error::InvalidFen {
                field: FenField::EnPassant,
                detail: fields[3].to_string(),
            })?)
        };

        let halfmove_clock: u32 = fields[4].parse().map_err(|_| Error::InvalidFen {
            field: FenField::HalfmoveClock,
            detail: fields[4].to_string(),
        })?;

        let fullmove_counter: u32 = fields[5].parse().map_err(|_| Error::InvalidFen {
            field: FenField::FullmoveCounter,
            detail: fields[5].to_string(),
        })?;
        if fullmove_counter < 1 {
            return Err(Error::InvalidFen {
                field: FenField::FullmoveCounter,
                detail: fields[5].to_string(),
            });
        }

        Ok(Self {
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_counter,
            captures: Vec::new(),
        })
    }

    /// Encodes the full 6-field FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.board.to_placement(),
            self.turn.to_fen_char(),
            self.castling.to_fen(),
            self.en_passant.map(|sq| sq.algebraic()).unwrap_or_else(|| "-".to_string()),
            self.halfmove_clock,
            self.fullmove_counter,
        )
    }

    /// The key used to identify this position for threefold-repetition
    /// purposes: placement + turn + castling + en-passant, excluding the
    /// halfmove/fullmove counters (FIDE's repetition definition ignores
    /// them — see the GLOSSARY's FEN-key entry).
    pub fn repetition_key(&self) -> String {
        format!(
            "{} {} {} {}",
            self.board.to_placement(),
            self.turn.to_fen_char(),
            self.castling.to_fen(),
            self.en_passant.map(|sq| sq.algebraic()).unwrap_or_else(|| "-".to_string()),
        )
    }

    /// Produces the position that results from applying `mv` to `self`.
    ///
    /// `record_capture` controls whether a captured piece is appended to
    /// the returned position's `captures` log — callers simulating a move
    /// purely to test king safety pass `false`, since the log is only
    /// meaningful for moves actually committed to a game's history.
    pub fn make_move(&self, mv: &Move, record_capture: bool) -> Position {
        let mover = mv.moving_piece.color;
        let mut next = self.clone();
        next.en_passant = None;

        if mv.is_castling() {
            let rights = next.castling.for_color_mut(mover);
            rights.king_side = false;
            rights.queen_side = false;

            let rank = mv.from.i;
            next.board.set(mv.from, None);
            next.board.set(mv.to, Some(Piece::new(mover, PieceKind::King, mv.to)));

            let (rook_from_j, rook_to_j) = if mv.is_king_side_castling { (7, 5) } else { (0, 3) };
            let rook_from = Square::new_unchecked(rank, rook_from_j);
            let rook_to = Square::new_unchecked(rank, rook_to_j);
            next.board.set(rook_from, None);
            next.board.set(rook_to, Some(Piece::new(mover, PieceKind::Rook, rook_to)));
        } else {
            if let Some(captured) = mv.captured_piece {
                next.board.set(captured.square, None);
                if record_capture {
                    next.captures.push(captured);
                }
                if captured.kind == PieceKind::Rook {
                    Self::clear_rook_right_if_home_corner(
                        &mut next.castling,
                        captured.square,
                        captured.color,
                    );
                }
            }

            if mv.is_double_pawn_push {
                let ep_i = (mv.from.i + mv.to.i) / 2;
                next.en_passant = Some(Square::new_unchecked(ep_i, mv.from.j));
            }

            next.board.set(mv.from, None);
            let placed_kind = mv.promotion.unwrap_or(mv.moving_piece.kind);
            next.board.set(mv.to, Some(Piece::new(mover, placed_kind, mv.to)));

            match mv.moving_piece.kind {
                PieceKind::King => {
                    let rights = next.castling.for_color_mut(mover);
                    rights.king_side = false;
                    rights.queen_side = false;
                }
                PieceKind::Rook => {
                    Self::clear_rook_right_if_home_corner(&mut next.castling, mv.from, mover);
                }
                _ => {}
            }
        }

        if mv.moving_piece.kind == PieceKind::Pawn || mv.is_capture() {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock += 1;
        }

        next.turn = mover.opponent();
        if mover == Color::Black {
            next.fullmove_counter += 1;
        }

        next
    }

    fn clear_rook_right_if_home_corner(castling: &mut CastlingRights, sq: Square, color: Color) {
        let home_rank = match color {
            Color::White => 7,
            Color::Black => 0,
        };
        if sq.i != home_rank {
            return;
        }
        let rights = castling.for_color_mut(color);
        match sq.j {
            0 => rights.queen_side = false,
            7 => rights.king_side = false,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_round_trip_for_starting_position() {
        let pos = Position::starting();
        let fen = pos.to_fen();
        assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(Position::from_fen(&fen).unwrap(), pos);
    }

    #[test]
    fn rejects_malformed_fen() {
        assert!(Position::from_fen("not a fen").is_err());
        assert!(Position::from_fen(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0"
        )
        .is_err());
    }

    #[test]
    fn double_pawn_push_arms_en_passant_behind_the_pawn() {
        let pos =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 2")
                .unwrap();
        let from = Square::from_algebraic("d2").unwrap();
        let to = Square::from_algebraic("d4").unwrap();
        let pawn = Piece::new(Color::White, PieceKind::Pawn, from);
        let mv = Move::simple(pawn, from, to).with_double_pawn_push();
        let next = pos.make_move(&mv, true);
        assert_eq!(next.en_passant, Some(Square::from_algebraic("d3").unwrap()));
    }

    #[test]
    fn en_passant_capture_removes_pushed_pawn_not_landing_square() {
        let pos = Position::from_fen(
            "rnbqkbnr/ppp1pppp/8/2PpP3/8/8/PP1P1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .unwrap();
        let from = Square::from_algebraic("e5").unwrap();
        let to = Square::from_algebraic("d6").unwrap();
        let captured_sq = Square::from_algebraic("d5").unwrap();
        let pawn = Piece::new(Color::White, PieceKind::Pawn, from);
        let captured = Piece::new(Color::Black, PieceKind::Pawn, captured_sq);
        let mv = Move::simple(pawn, from, to).with_capture(captured);
        assert!(mv.is_en_passant());
        let next = pos.make_move(&mv, true);
        assert!(next.board.get(captured_sq).is_none());
        assert!(next.board.get(to).is_some());
    }

    #[test]
    fn castling_clears_both_rights_for_mover() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let from = Square::from_algebraic("e1").unwrap();
        let to = Square::from_algebraic("g1").unwrap();
        let king = Piece::new(Color::White, PieceKind::King, from);
        let mv = Move::simple(king, from, to).with_king_side_castling();
        let next = pos.make_move(&mv, true);
        assert!(!next.castling.white.king_side);
        assert!(!next.castling.white.queen_side);
        assert!(next.castling.black.king_side);
        assert_eq!(
            next.board.get(Square::from_algebraic("f1").unwrap()).unwrap().kind,
            PieceKind::Rook
        );
    }

    #[test]
    fn rook_capture_on_home_corner_clears_that_right() {
        let pos = Position::from_fen("r3k3/8/8/8/8/8/8/R3K2R w Qkq - 0 1").unwrap();
        // Imagine a black piece captures the white queenside rook on a1.
        let from = Square::from_algebraic("a8").unwrap();
        let to = Square::from_algebraic("a1").unwrap();
        let rook = Piece::new(Color::Black, PieceKind::Rook, from);
        let captured = Piece::new(Color::White, PieceKind::Rook, to);
        let mv = Move::simple(rook, from, to).with_capture(captured);
        let next = pos.make_move(&mv, true);
        assert!(!next.castling.white.queen_side);
    }
}
