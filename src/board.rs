//! The 8×8 board array and its FEN placement codec.

use serde::{Deserialize, Serialize};

use crate::error::{Error, FenField};
use crate::piece::{Color, Piece, PieceKind};
use crate::square::Square;

/// Castling rights for one side of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideCastlingRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl Default for SideCastlingRights {
    fn default() -> Self {
        Self { king_side: true, queen_side: true }
    }
}

/// Castling rights for both colors.
///
/// Four independent booleans indexed by (Color, Side) — losing one never
/// implies losing another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideCastlingRights,
    pub black: SideCastlingRights,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self { white: SideCastlingRights::default(), black: SideCastlingRights::default() }
    }
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            white: SideCastlingRights { king_side: false, queen_side: false },
            black: SideCastlingRights { king_side: false, queen_side: false },
        }
    }

    pub fn for_color(&self, color: Color) -> &SideCastlingRights {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn for_color_mut(&mut self, color: Color) -> &mut SideCastlingRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// FEN castling field: `"KQkq"`-style string, or `"-"` iff all four
    /// rights are false.
    pub fn to_fen(self) -> String {
        let mut s = String::new();
        if self.white.king_side {
            s.push('K');
        }
        if self.white.queen_side {
            s.push('Q');
        }
        if self.black.king_side {
            s.push('k');
        }
        if self.black.queen_side {
            s.push('q');
        }
        if s.is_empty() {
            "-".to_string()
        } else {
            s
        }
    }

    /// Parses a FEN castling field.
    pub fn from_fen(field: &str) -> Result<Self, Error> {
        if field == "-" {
            return Ok(Self::none());
        }
        if field.is_empty() || !field.chars().all(|c| "KQkq".contains(c)) {
            return Err(Error::InvalidFen {
                field: FenField::Castling,
                detail: field.to_string(),
            });
        }
        Ok(Self {
            white: SideCastlingRights {
                king_side: field.contains('K'),
                queen_side: field.contains('Q'),
            },
            black: SideCastlingRights {
                king_side: field.contains('k'),
                queen_side: field.contains('q'),
            },
        })
    }
}

/// The 8×8 chessboard, stored as a flat 64-cell array of `Option<Piece>`
/// indexed `i * 8 + j` (row-major, row 0 = rank 8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self { squares: [None; 64] }
    }
}

impl Board {
    /// Returns the piece occupying `sq`, if any.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Sets (or clears, with `None`) the piece at `sq`.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// The standard starting position.
    pub fn starting_position() -> Self {
        Self::from_placement(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        )
        .expect("starting placement is well-formed")
    }

    /// Finds the square of the king of `color`.
    ///
    /// Returns `None` only for a board that violates the "exactly one king
    /// per color" invariant — this should never happen for a position
    /// reached through legal play.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.squares.iter().enumerate().find_map(|(idx, cell)| {
            let piece = (*cell)?;
            (piece.kind == PieceKind::King && piece.color == color)
                .then(|| Square::new_unchecked((idx / 8) as u8, (idx % 8) as u8))
        })
    }

    /// Iterates over every occupied square and its piece.
    pub fn occupied(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().filter_map(|cell| *cell)
    }

    /// Encodes the piece-placement field of a FEN string (rank 8 first,
    /// `/`-separated, digits for empty runs).
    pub fn to_placement(&self) -> String {
        let mut fen = String::new();
        for i in 0..8u8 {
            let mut empty_run = 0u8;
            for j in 0..8u8 {
                match self.get(Square::new_unchecked(i, j)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if i != 7 {
                fen.push('/');
            }
        }
        fen
    }

    /// Decodes the piece-placement field of a FEN string.
    pub fn from_placement(placement: &str) -> Result<Self, Error> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(Error::InvalidFen {
                field: FenField::Placement,
                detail: placement.to_string(),
            });
        }

        let mut board = Board::default();
        for (i, row) in rows.iter().enumerate() {
            let mut j = 0u8;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    j += skip as u8;
                } else {
                    let (kind, color) = Piece::kind_and_color_from_rune(c).ok_or_else(|| {
                        Error::InvalidFen {
                            field: FenField::Placement,
                            detail: placement.to_string(),
                        }
                    })?;
                    if j >= 8 {
                        return Err(Error::InvalidFen {
                            field: FenField::Placement,
                            detail: placement.to_string(),
                        });
                    }
                    let sq = Square::new_unchecked(i as u8, j);
                    board.set(sq, Some(Piece::new(color, kind, sq)));
                    j += 1;
                }
            }
            if j != 8 {
                return Err(Error::InvalidFen {
                    field: FenField::Placement,
                    detail: placement.to_string(),
                });
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_round_trip() {
        let board = Board::starting_position();
        let placement = board.to_placement();
        assert_eq!(placement, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(Board::from_placement(&placement).unwrap(), board);
    }

    #[test]
    fn finds_both_kings() {
        let board = Board::starting_position();
        assert_eq!(board.find_king(Color::White).unwrap().algebraic(), "e1");
        assert_eq!(board.find_king(Color::Black).unwrap().algebraic(), "e8");
    }

    #[test]
    fn rejects_malformed_placement() {
        assert!(Board::from_placement("bad").is_err());
        assert!(Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP").is_err());
    }

    #[test]
    fn rejects_out_of_range_empty_run_digits() {
        assert!(Board::from_placement("pppppppp/pppppppp/8/8/8/8/8/pppppppp0").is_err());
        assert!(Board::from_placement("9/pppppppp/8/8/8/8/8/pppppppp").is_err());
    }

    #[test]
    fn castling_fen_round_trip() {
        let rights = CastlingRights::default();
        assert_eq!(rights.to_fen(), "KQkq");
        assert_eq!(CastlingRights::from_fen("KQkq").unwrap(), rights);
        assert_eq!(CastlingRights::from_fen("-").unwrap(), CastlingRights::none());
        assert_eq!(CastlingRights::from_fen("Kq").unwrap().to_fen(), "Kq");
    }
}
