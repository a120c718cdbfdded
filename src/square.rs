//! Board coordinates and their algebraic notation codec.
//!
//! `Square` uses a row-zero-at-top convention internally (`i == 0` is rank
//! 8, `j == 0` is file a) — this is hidden entirely behind the algebraic
//! codec, which is the only representation callers outside this crate
//! should rely on.

use std::fmt;

use crate::error::Error;

/// A board coordinate, `0 ≤ i,j ≤ 7`.
///
/// `i` is the row, with `0` at rank 8 and `7` at rank 1. `j` is the
/// column, with `0` at file a and `7` at file h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub i: u8,
    pub j: u8,
}

impl Square {
    /// Creates a square from zero-based row/column indices.
    ///
    /// Fails if either coordinate is out of the `0..8` range.
    pub fn new(i: u8, j: u8) -> Result<Self, Error> {
        if i > 7 || j > 7 {
            return Err(Error::InvalidSquare(format!(
                "row/column out of range: ({i}, {j})"
            )));
        }
        Ok(Self { i, j })
    }

    /// Creates a square without bounds checking. Only used internally
    /// where the coordinates are already known to be in range (e.g. board
    /// scans, offset computations that were already bounds-checked).
    pub(crate) fn new_unchecked(i: u8, j: u8) -> Self {
        debug_assert!(i < 8 && j < 8);
        Self { i, j }
    }

    /// Parses an algebraic notation string (e.g. `"e4"`) into a `Square`.
    pub fn from_algebraic(s: &str) -> Result<Self, Error> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidSquare(s.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(Error::InvalidSquare(s.to_string()));
        }
        let j = file - b'a';
        let i = b'8' - rank;
        Ok(Self::new_unchecked(i, j))
    }

    /// Renders this square in algebraic notation (e.g. `"e4"`).
    pub fn algebraic(self) -> String {
        let file = (b'a' + self.j) as char;
        let rank = (b'8' - self.i) as char;
        format!("{file}{rank}")
    }

    /// Returns the square offset by `(di, dj)`, or `None` if it would fall
    /// off the board.
    pub fn offset(self, di: i8, dj: i8) -> Option<Square> {
        let i = self.i as i8 + di;
        let j = self.j as i8 + dj;
        if (0..8).contains(&i) && (0..8).contains(&j) {
            Some(Square::new_unchecked(i as u8, j as u8))
        } else {
            None
        }
    }

    /// Flat `0..64` index, `i * 8 + j`.
    pub fn index(self) -> usize {
        self.i as usize * 8 + self.j as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.algebraic())
    }
}
