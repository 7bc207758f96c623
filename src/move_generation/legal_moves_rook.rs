//! Rook move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{slide_moves, squares_of, MoveContext};
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, context: &MoveContext, out: &mut Vec<Move>) {
    for from in squares_of(game_state, context.side, PieceKind::Rook) {
        rook_moves_from(game_state, context, from, out);
    }
}

/// Orthogonal slides from `from`; also used for the queen's rook half.
#[inline]
pub fn rook_moves_from(
    game_state: &GameState,
    context: &MoveContext,
    from: Square,
    out: &mut Vec<Move>,
) {
    slide_moves(game_state, context, from, &ROOK_DIRECTIONS, out);
}
