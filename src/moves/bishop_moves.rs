use crate::game_state::chess_types::Direction;

/// Diagonal unit steps: up-left, up-right, down-left, down-right.
pub const BISHOP_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub const fn is_bishop_direction(direction: Direction) -> bool {
    direction.0 != 0 && direction.0.abs() == direction.1.abs()
}
