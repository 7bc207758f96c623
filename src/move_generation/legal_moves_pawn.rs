//! Pawn move generation: pushes, double pushes, captures and en passant.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{enemy_piece_on, squares_of, MoveContext};
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::{pawn_capture_directions, pawn_forward, pawn_start_row};

pub fn generate_pawn_moves(game_state: &GameState, context: &MoveContext, out: &mut Vec<Move>) {
    let side = context.side;
    let board = &game_state.board;
    let push: Direction = (pawn_forward(side), 0);

    for from in squares_of(game_state, side, PieceKind::Pawn) {
        if context.pin_allows(from, push) {
            if let Some(one_step) = from.offset(push, 1).filter(|sq| board.is_empty(*sq)) {
                out.push(Move::new(from, one_step, board));

                if from.row == pawn_start_row(side) {
                    if let Some(two_step) = from.offset(push, 2).filter(|sq| board.is_empty(*sq)) {
                        out.push(Move::new(from, two_step, board));
                    }
                }
            }
        }

        for direction in pawn_capture_directions(side) {
            if !context.pin_allows(from, direction) {
                continue;
            }
            let Some(to) = from.offset(direction, 1) else {
                continue;
            };

            if enemy_piece_on(game_state, to, side).is_some() {
                out.push(Move::new(from, to, board));
            } else if game_state.en_passant_square == Some(to) && board.is_empty(to) {
                out.push(Move::en_passant(from, to, board));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::{analyze, CheckReport};

    fn pawn_moves(game_state: &GameState) -> Vec<Move> {
        let report = analyze(game_state);
        let context = MoveContext::legal(game_state.side_to_move, &report);
        let mut out = Vec::new();
        generate_pawn_moves(game_state, &context, &mut out);
        out
    }

    #[test]
    fn start_position_has_sixteen_pawn_moves() {
        assert_eq!(pawn_moves(&GameState::new_game()).len(), 16);
    }

    #[test]
    fn blocked_pawn_has_no_push_and_no_double_push() {
        let game_state = GameState::from_layout(
            &[
                "-- -- -- -- bK -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- bN -- -- --",
                "-- -- -- -- wp -- -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::Light,
            0,
        )
        .expect("layout should parse");
        assert!(pawn_moves(&game_state).is_empty());
    }

    #[test]
    fn pinned_pawn_may_only_capture_along_the_diagonal_pin() {
        // Bishop on h4 pins the f2 pawn against the king on e1.
        let game_state = GameState::from_layout(
            &[
                "-- -- -- -- bK -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- bB",
                "-- -- -- -- bN -- -- --",
                "-- -- -- -- -- wp -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::Light,
            0,
        )
        .expect("layout should parse");
        let report: CheckReport = analyze(&game_state);
        assert_eq!(report.pins.len(), 1);

        let moves = pawn_moves(&game_state);
        // No push to f3 and no capture of the knight on e3.
        assert!(moves.is_empty());
    }

    #[test]
    fn en_passant_target_produces_flagged_capture() {
        let mut game_state = GameState::from_layout(
            &[
                "-- -- -- -- bK -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- bp wp -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::Light,
            0,
        )
        .expect("layout should parse");
        game_state.en_passant_square = Some(Square::new(2, 3));

        let moves = pawn_moves(&game_state);
        let ep = moves
            .iter()
            .find(|mv| mv.is_en_passant)
            .expect("en passant should be generated");
        assert_eq!(ep.to, Square::new(2, 3));
        assert_eq!(moves.len(), 2);
    }
}
