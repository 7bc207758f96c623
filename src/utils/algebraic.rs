//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and mailbox
//! squares. Row 0 is rank 8, column 0 is the a-file.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_char(square), rank_char(square))
}

#[inline]
pub fn file_char(square: Square) -> char {
    char::from(b'a' + square.col)
}

#[inline]
pub fn rank_char(square: Square) -> char {
    char::from(b'8' - square.row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_centre_squares_convert() {
        assert_eq!(
            algebraic_to_square("a8").expect("a8 should parse"),
            Square::new(0, 0)
        );
        assert_eq!(
            algebraic_to_square("h1").expect("h1 should parse"),
            Square::new(7, 7)
        );
        assert_eq!(
            algebraic_to_square("e4").expect("e4 should parse"),
            Square::new(4, 4)
        );
        assert_eq!(square_to_algebraic(Square::new(6, 4)), "e2");
        assert_eq!(square_to_algebraic(Square::new(0, 7)), "h8");
    }

    #[test]
    fn rejects_malformed_squares() {
        for text in ["", "e", "e9", "i4", "e44", "E4"] {
            assert_eq!(
                algebraic_to_square(text),
                Err(ChessError::InvalidAlgebraicSquare(text.to_owned()))
            );
        }
    }
}
