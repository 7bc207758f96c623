//! Engine abstraction layer used by the match harness and the driver binary.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// UCI-style diagnostics, for example `info depth 2 score 3 nodes 812`.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        Err(ChessError::InvalidOption(name.to_owned(), value.to_owned()))
    }

    /// Pick a move for the side to move. `best_move` is `None` only when the
    /// position has no legal move.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}

/// Parse the `Seed` option value shared by the seeded engines.
pub(crate) fn parse_seed(name: &str, value: &str) -> ChessResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ChessError::InvalidOption(name.to_owned(), value.to_owned()))
}
