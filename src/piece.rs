//! Piece colors and kinds, and their rune/FEN-character codecs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::square::Square;

/// The side a piece or player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row index (0-based, 0 = rank 8) pawns of this color start on.
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row index (0-based, 0 = rank 8) pawns of this color promote on.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row delta pawns of this color move forward: `-1` for White (towards
    /// row 0 / rank 8), `+1` for Black.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// FEN `w`/`b` character for this color as the side to move.
    pub fn to_fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Parses a FEN side-to-move character.
    pub fn from_fen_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A chess piece type, colorless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Lowercase canonical rune (`k q r b n p`).
    pub fn to_rune(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Parses a lowercase kind rune. `_` and anything else return `None`.
    pub fn from_rune(c: char) -> Option<PieceKind> {
        match c {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// A chess piece: kind, color, and the square it occupies.
///
/// The square is redundant with the piece's position in `Board`'s array
/// but kept for codec convenience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, square: Square) -> Self {
        Self { color, kind, square }
    }

    /// FEN character: uppercase for White, lowercase for Black.
    pub fn to_fen_char(self) -> char {
        let c = self.kind.to_rune();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN piece character (case selects color).
    pub fn kind_and_color_from_rune(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_uppercase() { Color::White } else { Color::Black };
        let kind = PieceKind::from_rune(c.to_ascii_lowercase())?;
        Some((kind, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_char_round_trip() {
        for kind in [
            PieceKind::King,
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Pawn,
        ] {
            for color in [Color::White, Color::Black] {
                let sq = Square::new(0, 0).unwrap();
                let piece = Piece::new(color, kind, sq);
                let (parsed_kind, parsed_color) =
                    Piece::kind_and_color_from_rune(piece.to_fen_char()).unwrap();
                assert_eq!(parsed_kind, kind);
                assert_eq!(parsed_color, color);
            }
        }
    }

    #[test]
    fn opponent_is_involutive() {
        assert_eq!(Color::White.opponent().opponent(), Color::White);
    }
}
