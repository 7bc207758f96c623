use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{squares_of, MoveContext};
use crate::move_generation::legal_moves_bishop::bishop_moves_from;
use crate::move_generation::legal_moves_rook::rook_moves_from;
use crate::moves::chess_move::Move;

/// Queen moves are the union of the rook and bishop patterns from the same
/// square, both checked against the same (unmodified) pin entry.
pub fn generate_queen_moves(game_state: &GameState, context: &MoveContext, out: &mut Vec<Move>) {
    for from in squares_of(game_state, context.side, PieceKind::Queen) {
        rook_moves_from(game_state, context, from, out);
        bishop_moves_from(game_state, context, from, out);
    }
}
