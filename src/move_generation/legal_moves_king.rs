use crate::game_state::chess_rules::{back_rank, KING_START_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::MoveContext;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(game_state: &GameState, context: &MoveContext, out: &mut Vec<Move>) {
    let side = context.side;
    let board = &game_state.board;
    let from = game_state.king_square(side);
    if board.get(from) != Some(Piece::new(side, PieceKind::King)) {
        return;
    }

    for to in king_targets(from) {
        if board.get(to).is_some_and(|piece| piece.color == side) {
            continue;
        }
        if context.king_safety && is_square_attacked(board, to, side.opposite()) {
            continue;
        }
        out.push(Move::new(from, to, board));
    }

    generate_castling_moves(game_state, context, from, out);
}

fn generate_castling_moves(
    game_state: &GameState,
    context: &MoveContext,
    king_from: Square,
    out: &mut Vec<Move>,
) {
    // Cannot castle out of check.
    if context.in_check {
        return;
    }

    let side = context.side;
    let enemy = side.opposite();
    let rank = back_rank(side);
    if king_from != Square::new(rank, KING_START_COL) {
        return;
    }

    let board = &game_state.board;
    let empty = |col: u8| board.is_empty(Square::new(rank, col));
    let safe = |col: u8| !is_square_attacked(board, Square::new(rank, col), enemy);

    if game_state.castling_rights & kingside_right(side) != 0
        && empty(5)
        && empty(6)
        && safe(5)
        && safe(6)
    {
        out.push(Move::castle(king_from, Square::new(rank, 6), board));
    }

    // The b-file square must be empty but the king never crosses it.
    if game_state.castling_rights & queenside_right(side) != 0
        && empty(3)
        && empty(2)
        && empty(1)
        && safe(3)
        && safe(2)
    {
        out.push(Move::castle(king_from, Square::new(rank, 2), board));
    }
}
