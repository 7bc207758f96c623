use crate::game_state::chess_types::{Color, Direction};

/// Row step of a pawn push. Light pawns move towards row 0.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

/// Row from which a double push is allowed.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// The two diagonal steps a pawn of `color` captures along.
#[inline]
pub const fn pawn_capture_directions(color: Color) -> [Direction; 2] {
    let forward = pawn_forward(color);
    [(forward, -1), (forward, 1)]
}
