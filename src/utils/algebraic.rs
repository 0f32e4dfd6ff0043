//! Conversions between `Square` and human-readable algebraic coordinates.
//!
//! Reused by move naming, repetition signatures, and tests.

use crate::errors::ChessError;
use crate::game_state::chess_types::Square;

/// Letter for a file index in `1..=8` (`1 == 'a'`).
#[inline]
pub fn file_letter(file: u8) -> char {
    char::from(b'a' + file - 1)
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    Ok(Square::new(file - b'a' + 1, rank - b'1' + 1))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_letter(square.file), square.rank)
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_corner_squares() {
        assert_eq!(
            algebraic_to_square("a1").expect("a1 should parse"),
            Square::new(1, 1)
        );
        assert_eq!(
            algebraic_to_square("h8").expect("h8 should parse"),
            Square::new(8, 8)
        );
        assert_eq!(square_to_algebraic(Square::new(1, 1)), "a1");
        assert_eq!(square_to_algebraic(Square::new(8, 8)), "h8");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for text in ["", "e", "e44", "i4", "e9", "E4"] {
            assert!(
                algebraic_to_square(text).is_err(),
                "{text:?} should not parse"
            );
        }
    }
}
