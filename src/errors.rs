//! Recoverable error type for parsing and replay utilities.
//!
//! Invalid user intent (stale targets, wrong-turn selections, out-of-range
//! ply indices) is silently ignored by the game controller and never
//! surfaces here; this enum covers genuinely fallible conversions and
//! history replay over caller-supplied data.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// An algebraic square string (for example `"e4"`) failed to parse.
    InvalidAlgebraicSquare(String),
    /// A recorded move does not fit the position being replayed, which means
    /// the history log is corrupt.
    InconsistentHistory(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidAlgebraicSquare(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
            ChessError::InconsistentHistory(msg) => {
                write!(f, "inconsistent move history: {msg}")
            }
        }
    }
}

impl Error for ChessError {}
