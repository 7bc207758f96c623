use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{squares_of, MoveContext};
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, context: &MoveContext, out: &mut Vec<Move>) {
    let board = &game_state.board;

    for from in squares_of(game_state, context.side, PieceKind::Knight) {
        // A knight jump always leaves the pin line.
        if context.pin_on(from).is_some() {
            continue;
        }

        for to in knight_targets(from) {
            let own_piece = board.get(to).is_some_and(|piece| piece.color == context.side);
            if !own_piece {
                out.push(Move::new(from, to, board));
            }
        }
    }
}
