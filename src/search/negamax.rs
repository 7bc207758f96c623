//! Fixed-depth negamax with alpha-beta pruning.
//!
//! The search works on the live game state: every move is applied, searched
//! and undone in place. Nothing but the status cache changes while
//! exploring, and that cache is restored before returning.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, CHECKMATE_SCORE};

/// Bound wider than any reachable score.
pub const INF: i32 = CHECKMATE_SCORE + 1;

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Shuffle root moves so equal-scoring moves are not always picked in
    /// generation order.
    pub shuffle_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            shuffle_root: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` only when the root position has no legal move.
    pub best_move: Option<Move>,
    /// Score from the side to move's point of view.
    pub score: i32,
    pub nodes: u64,
}

/// Best move for the side to move, searched `config.depth` plies deep.
pub fn find_best_move<S, R>(
    game_state: &mut GameState,
    scorer: &S,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchOutcome
where
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    let saved_status = game_state.status.clone();
    let sign = match game_state.side_to_move {
        Color::Light => 1,
        Color::Dark => -1,
    };

    let mut moves = game_state.legal_moves();
    if config.shuffle_root {
        moves.shuffle(rng);
    }

    let mut outcome = SearchOutcome {
        best_move: None,
        score: -INF,
        nodes: 1,
    };
    if moves.is_empty() {
        outcome.score = sign * scorer.score(game_state);
        game_state.status = saved_status;
        return outcome;
    }

    let depth = config.depth.max(1);
    let mut alpha = -INF;
    let beta = INF;

    for mv in moves {
        game_state.apply_move(mv);
        let score = -negamax(
            game_state,
            scorer,
            depth - 1,
            -beta,
            -alpha,
            -sign,
            &mut outcome.nodes,
        );
        game_state.undo_move();

        if score > outcome.score {
            outcome.score = score;
            outcome.best_move = Some(mv);
        }
        alpha = alpha.max(score);
    }

    game_state.status = saved_status;
    outcome
}

/// Score of `game_state` for the side whose perspective `sign` selects
/// (`1` light, `-1` dark).
pub fn negamax<S>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    sign: i32,
    nodes: &mut u64,
) -> i32
where
    S: BoardScorer + ?Sized,
{
    *nodes += 1;

    // Enumerate even at the horizon so mate and stalemate are scored.
    let moves = game_state.legal_moves();
    if depth == 0 || moves.is_empty() {
        return sign * scorer.score(game_state);
    }

    let mut best = -INF;
    for mv in moves {
        game_state.apply_move(mv);
        let score = -negamax(game_state, scorer, depth - 1, -beta, -alpha, -sign, nodes);
        game_state.undo_move();

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    best
}
