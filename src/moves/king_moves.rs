use crate::game_state::chess_types::{Direction, Square};
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub const KING_OFFSETS: [Direction; 8] = QUEEN_DIRECTIONS;

/// On-board king steps from `square`.
#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |offset| square.offset(offset, 1))
}
