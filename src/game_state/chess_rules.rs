//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting layout, back ranks, castling
//! geometry and the repetition threshold.

use crate::game_state::chess_types::*;

/// Standard starting position, row 0 (dark back rank) first.
pub const STARTING_LAYOUT: [&str; 8] = [
    "bR bN bB bQ bK bB bN bR",
    "bp bp bp bp bp bp bp bp",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "wp wp wp wp wp wp wp wp",
    "wR wN wB wQ wK wB wN wR",
];

/// Board built from the standard starting arrangement.
pub fn starting_board() -> Board {
    use PieceKind::*;
    let mut board = Board::empty();
    let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
    for (col, kind) in back.into_iter().enumerate() {
        let col = col as u8;
        board.set(Square::new(0, col), Some(Piece::new(Color::Dark, kind)));
        board.set(Square::new(1, col), Some(Piece::new(Color::Dark, Pawn)));
        board.set(Square::new(6, col), Some(Piece::new(Color::Light, Pawn)));
        board.set(Square::new(7, col), Some(Piece::new(Color::Light, kind)));
    }
    board
}

/// Number of times the same board must appear to flag a repetition draw.
pub const REPETITION_LIMIT: u8 = 3;

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Castling right lost when a rook leaves, or is captured on, `square`.
#[inline]
pub fn rook_home_right(square: Square) -> Option<CastlingRights> {
    match (square.row, square.col) {
        (7, KINGSIDE_ROOK_COL) => Some(CASTLE_LIGHT_KINGSIDE),
        (7, QUEENSIDE_ROOK_COL) => Some(CASTLE_LIGHT_QUEENSIDE),
        (0, KINGSIDE_ROOK_COL) => Some(CASTLE_DARK_KINGSIDE),
        (0, QUEENSIDE_ROOK_COL) => Some(CASTLE_DARK_QUEENSIDE),
        _ => None,
    }
}

/// Rook `(from, to)` squares for a castle whose king lands on `king_to`.
#[inline]
pub fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    if king_to.col > KING_START_COL {
        (
            Square::new(king_to.row, KINGSIDE_ROOK_COL),
            Square::new(king_to.row, king_to.col - 1),
        )
    } else {
        (
            Square::new(king_to.row, QUEENSIDE_ROOK_COL),
            Square::new(king_to.row, king_to.col + 1),
        )
    }
}
