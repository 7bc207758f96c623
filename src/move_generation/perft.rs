//! Move-path enumeration for validating the generator.
//!
//! Walks the game tree in place with `apply_move`/`undo_move`, so it also
//! exercises the make/unmake pair on every node it visits.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf counts `depth` plies below `game_state`. The state is left as found.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    perft_recurse(game_state, depth, &mut total);
    game_state.legal_moves();
    total
}

/// Leaf-node count per root move, keyed by long algebraic text.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(String, usize)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }

    for mv in game_state.legal_moves() {
        game_state.apply_move(mv);
        let counts = perft(game_state, depth - 1);
        game_state.undo_move();
        out.push((mv.to_long_algebraic(), counts.nodes));
    }
    game_state.legal_moves();
    out
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = game_state.legal_moves();

    if depth == 1 {
        for mv in moves {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            if mv.is_capture() {
                leaf.captures = 1;
            }
            if mv.is_en_passant {
                leaf.en_passant = 1;
            }
            if mv.is_castle {
                leaf.castles = 1;
            }
            if mv.is_pawn_promotion {
                leaf.promotions = 1;
            }

            game_state.apply_move(mv);
            if is_king_in_check(game_state, game_state.side_to_move) {
                leaf.checks = 1;
                if game_state.legal_moves().is_empty() {
                    leaf.checkmates = 1;
                }
            }
            game_state.undo_move();
            counts.merge(leaf);
        }
        return;
    }

    for mv in moves {
        game_state.apply_move(mv);
        perft_recurse(game_state, depth - 1, counts);
        game_state.undo_move();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, CASTLE_ALL};

    const KIWIPETE: [&str; 8] = [
        "bR -- -- -- bK -- -- bR",
        "bp -- bp bp bQ bp bB --",
        "bB bN -- -- bp bN bp --",
        "-- -- -- wp wN -- -- --",
        "-- bp -- -- wp -- -- --",
        "-- -- wN -- -- wQ -- bp",
        "wp wp wp wB wB wp wp wp",
        "wR -- -- -- wK -- -- wR",
    ];

    const ROOK_ENDGAME: [&str; 8] = [
        "-- -- -- -- -- -- -- --",
        "-- -- bp -- -- -- -- --",
        "-- -- -- bp -- -- -- --",
        "wK wp -- -- -- -- -- bR",
        "-- wR -- -- -- bp -- bK",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- wp -- wp --",
        "-- -- -- -- -- -- -- --",
    ];

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game_state = GameState::new_game();
        assert_eq!(perft(&mut game_state, 0).nodes, 1);
    }

    #[test]
    fn start_position_node_counts() {
        let mut game_state = GameState::new_game();
        let before = game_state.clone();

        assert_eq!(perft(&mut game_state, 1).nodes, 20);
        assert_eq!(perft(&mut game_state, 2).nodes, 400);

        let depth_three = perft(&mut game_state, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);

        assert_eq!(game_state.board, before.board);
        assert_eq!(game_state.repetition_counts, before.repetition_counts);
        assert!(game_state.move_history.is_empty());
    }

    #[test]
    fn kiwipete_node_counts() {
        let mut game_state = GameState::from_layout(&KIWIPETE, Color::Light, CASTLE_ALL)
            .expect("layout should parse");

        let depth_one = perft(&mut game_state, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&mut game_state, 2);
        assert_eq!(depth_two.nodes, 2039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn rook_endgame_node_counts() {
        let mut game_state = GameState::from_layout(&ROOK_ENDGAME, Color::Light, 0)
            .expect("layout should parse");

        assert_eq!(perft(&mut game_state, 1).nodes, 14);
        assert_eq!(perft(&mut game_state, 2).nodes, 191);

        let depth_three = perft(&mut game_state, 3);
        assert_eq!(depth_three.nodes, 2812);
        assert_eq!(depth_three.captures, 209);
        assert_eq!(depth_three.en_passant, 2);
        assert_eq!(depth_three.checks, 267);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game_state = GameState::new_game();
        let divide = perft_divide(&mut game_state, 2);
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divide.iter().map(|(_, nodes)| nodes).sum::<usize>(), 400);
    }
}
