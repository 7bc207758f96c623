//! Bishop move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{slide_moves, squares_of, MoveContext};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(game_state: &GameState, context: &MoveContext, out: &mut Vec<Move>) {
    for from in squares_of(game_state, context.side, PieceKind::Bishop) {
        bishop_moves_from(game_state, context, from, out);
    }
}

/// Diagonal slides from `from`; also used for the queen's bishop half.
#[inline]
pub fn bishop_moves_from(
    game_state: &GameState,
    context: &MoveContext,
    from: Square,
    out: &mut Vec<Move>,
) {
    slide_moves(game_state, context, from, &BISHOP_DIRECTIONS, out);
}
