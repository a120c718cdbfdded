//! Error taxonomy for the chess rule engine.
//!
//! Every fallible operation in this crate returns a `Result<_, Error>` —
//! there is no ambient panic/abort for user-level misuse (malformed FEN,
//! illegal moves, out-of-range history lookups). Internal invariant
//! violations (a board missing a king of the side to move) are bugs, not
//! input errors, and are reported with `unreachable!`/`debug_assert!`
//! instead of a `Result` variant.

use thiserror::Error;

/// A field of a FEN string that failed to parse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenField {
    #[error("piece placement")]
    Placement,
    #[error("active color")]
    ActiveColor,
    #[error("castling rights")]
    Castling,
    #[error("en passant target square")]
    EnPassant,
    #[error("halfmove clock")]
    HalfmoveClock,
    #[error("fullmove counter")]
    FullmoveCounter,
}

/// The error taxonomy for the rule engine's value-returning contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A FEN string did not have six space-separated fields, or one of
    /// those fields was malformed.
    #[error("invalid FEN ({field}): {detail}")]
    InvalidFen { field: FenField, detail: String },

    /// An out-of-range coordinate or malformed algebraic square string.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A move string was not well-formed pure algebraic notation.
    #[error("invalid move notation: {0}")]
    InvalidMove(String),

    /// A well-formed move that is not a member of the current legal-move
    /// set.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A position-history index was out of range.
    #[error("index {0} is out of range")]
    IndexOutOfRange(usize),

    /// Asked for the captured piece of a move that did not capture.
    #[error("move does not capture a piece")]
    NoCapture,

    /// Asked for the promotion target of a move that does not promote.
    #[error("move does not promote a pawn")]
    NoPromotion,

    /// Asked for the en-passant square of a position where none is set.
    #[error("no en passant square is set")]
    NoEnPassant,

    /// A `makeMovement` call was issued after the game already reached a
    /// terminal outcome.
    #[error("game has already ended: {0}")]
    GameOver(String),
}

pub type Result<T> = std::result::Result<T, Error>;
