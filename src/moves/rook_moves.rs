use crate::game_state::chess_types::{Direction, Square};

/// Orthogonal unit steps: up, left, down, right.
pub const ROOK_DIRECTIONS: [Direction; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Squares from `from` (exclusive) to the board edge along `direction`.
#[inline]
pub fn trace_ray(from: Square, direction: Direction) -> impl Iterator<Item = Square> {
    (1..8).map_while(move |steps| from.offset(direction, steps))
}

#[inline]
pub const fn is_rook_direction(direction: Direction) -> bool {
    (direction.0 == 0) != (direction.1 == 0)
}
