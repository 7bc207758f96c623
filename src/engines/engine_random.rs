//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as the fallback policy when the
//! search returns no move, and for diagnostics and match testing.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{parse_seed, Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random_engine"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name {
            "Seed" => {
                self.rng = StdRng::seed_from_u64(parse_seed(name, value)?);
                Ok(())
            }
            _ => Err(ChessError::InvalidOption(name.to_owned(), value.to_owned())),
        }
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.clone().legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {}",
                depth
            ));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
