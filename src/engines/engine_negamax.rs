//! Fixed-depth negamax engine scored by material.
//!
//! Falls back to a random legal move when the search yields none.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{parse_seed, Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::negamax::{find_best_move, SearchConfig};

pub const MAX_SEARCH_DEPTH: u8 = 6;

pub struct NegamaxEngine<S: BoardScorer = MaterialScorer> {
    scorer: S,
    config: SearchConfig,
    rng: StdRng,
    fallback: RandomEngine,
}

impl NegamaxEngine<MaterialScorer> {
    pub fn new() -> Self {
        Self::with_scorer(MaterialScorer, SearchConfig::default())
    }
}

impl Default for NegamaxEngine<MaterialScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> NegamaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self {
            scorer,
            config,
            rng: StdRng::from_os_rng(),
            fallback: RandomEngine::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<S: BoardScorer> Engine for NegamaxEngine<S> {
    fn name(&self) -> &str {
        "negamax_engine"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name {
            "Depth" => {
                let depth = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .filter(|depth| (1..=MAX_SEARCH_DEPTH).contains(depth))
                    .ok_or_else(|| ChessError::InvalidOption(name.to_owned(), value.to_owned()))?;
                self.config.depth = depth;
                Ok(())
            }
            "Seed" => {
                let seed = parse_seed(name, value)?;
                self.rng = StdRng::seed_from_u64(seed);
                self.fallback = RandomEngine::with_seed(seed);
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
        let depth = params
            .depth
            .map_or(self.config.depth, |depth| depth.clamp(1, MAX_SEARCH_DEPTH));
        let config = SearchConfig {
            depth,
            ..self.config
        };

        let started = Instant::now();
        let mut search_state = game_state.clone();
        let outcome = find_best_move(&mut search_state, &self.scorer, &config, &mut self.rng);
        let elapsed_ms = started.elapsed().as_millis();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {}",
            config.depth, outcome.score, outcome.nodes, elapsed_ms
        ));

        match outcome.best_move {
            Some(best_move) => out.best_move = Some(best_move),
            None => {
                out.info_lines
                    .push("info string negamax_engine fallback random".to_owned());
                let fallback = self.fallback.choose_move(game_state, params)?;
                out.best_move = fallback.best_move;
                out.info_lines.extend(fallback.info_lines);
            }
        }

        Ok(out)
    }
}
