//! The `Move` record and its pure long algebraic notation encoding.

use std::fmt;

use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// A single chess move, produced only by move generation — never
/// constructed externally for mutation.
///
/// `captured_piece`, when present, carries the captured piece's own
/// square. For an ordinary capture this equals `to`; for an en-passant
/// capture it is the square behind `to` where the captured pawn actually
/// sits — this is what distinguishes en passant from a normal capture
/// without a separate flag, mirroring how captures are recorded in the
/// reference implementation this crate's move generator is grounded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub moving_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub from: Square,
    pub to: Square,
    pub is_double_pawn_push: bool,
    pub promotion: Option<PieceKind>,
    pub is_king_side_castling: bool,
    pub is_queen_side_castling: bool,
}

impl Move {
    pub(crate) fn simple(moving_piece: Piece, from: Square, to: Square) -> Self {
        Self {
            moving_piece,
            captured_piece: None,
            from,
            to,
            is_double_pawn_push: false,
            promotion: None,
            is_king_side_castling: false,
            is_queen_side_castling: false,
        }
    }

    pub(crate) fn with_capture(mut self, captured: Piece) -> Self {
        self.captured_piece = Some(captured);
        self
    }

    pub(crate) fn with_double_pawn_push(mut self) -> Self {
        self.is_double_pawn_push = true;
        self
    }

    pub(crate) fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    pub(crate) fn with_king_side_castling(mut self) -> Self {
        self.is_king_side_castling = true;
        self
    }

    pub(crate) fn with_queen_side_castling(mut self) -> Self {
        self.is_queen_side_castling = true;
        self
    }

    /// `true` for a capture whose captured piece does not sit on `to` —
    /// i.e. an en-passant capture.
    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured_piece, Some(p) if p.square != self.to)
    }

    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    pub fn is_castling(&self) -> bool {
        self.is_king_side_castling || self.is_queen_side_castling
    }

    /// Pure long algebraic notation: `<from><to>[<promotion>]`, e.g.
    /// `"e2e4"` or `"f7f8q"`. Castling is the king's two-square move,
    /// e.g. `"e1g1"`; no check/checkmate suffixes are ever produced.
    pub fn to_algebraic(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promotion {
            s.push(kind.to_rune());
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
