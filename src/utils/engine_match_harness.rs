//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from a given start
//! position and records the game as long algebraic and log notation.

use std::time::Instant;

use chrono::Local;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameOutcome, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawRepetition,
    DrawMaxPlies,
}

impl From<GameOutcome> for MatchOutcome {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::LightWinsCheckmate => MatchOutcome::WhiteWinCheckmate,
            GameOutcome::DarkWinsCheckmate => MatchOutcome::BlackWinCheckmate,
            GameOutcome::DrawStalemate => MatchOutcome::DrawStalemate,
            GameOutcome::DrawRepetition => MatchOutcome::DrawRepetition,
        }
    }
}

impl MatchOutcome {
    pub fn result_text(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinCheckmate => GameOutcome::LightWinsCheckmate.result_text(),
            MatchOutcome::BlackWinCheckmate => GameOutcome::DarkWinsCheckmate.result_text(),
            MatchOutcome::DrawStalemate => GameOutcome::DrawStalemate.result_text(),
            MatchOutcome::DrawRepetition => GameOutcome::DrawRepetition.result_text(),
            MatchOutcome::DrawMaxPlies => "Draw by move limit!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
    pub move_log: Vec<String>,
    pub info_lines: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    /// Game record with a date header, numbered moves and the result line.
    pub fn report(&self, white: &str, black: &str) -> String {
        let mut out = format!(
            "[Date \"{}\"]\n[White \"{}\"]\n[Black \"{}\"]\n",
            Local::now().format("%Y.%m.%d"),
            white,
            black
        );

        for (index, pair) in self.move_log.chunks(2).enumerate() {
            out.push_str(&format!("{}. {}", index + 1, pair.join(" ")));
            out.push('\n');
        }

        out.push_str(self.outcome.result_text());
        out
    }
}

/// Play a single engine-vs-engine match from the standard start.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_state(GameState::new_game(), engine_white, engine_black, config)
}

/// Play a single engine-vs-engine match from a caller-provided state.
pub fn play_engine_match_from_state(
    mut state: GameState,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: GameState::new_game(),
        played_moves_lan: Vec::new(),
        move_log: Vec::new(),
        info_lines: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        let legal_moves = state.legal_moves();
        if let Some(outcome) = state.outcome() {
            result.outcome = outcome.into();
            result.final_state = state;
            return Ok(result);
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_white.choose_move(&state, &config.go_params)?,
            Color::Dark => engine_black.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }
        result.info_lines.extend(out.info_lines);

        let chosen = out.best_move.unwrap_or(legal_moves[0]);
        if !legal_moves.contains(&chosen) {
            return Err(ChessError::IllegalMove(chosen.to_long_algebraic()));
        }

        result.played_moves_lan.push(chosen.to_long_algebraic());
        result.move_log.push(chosen.to_log_notation());
        state.apply_move(chosen);
    }

    state.legal_moves();
    result.outcome = state
        .outcome()
        .map(MatchOutcome::from)
        .unwrap_or(MatchOutcome::DrawMaxPlies);
    result.final_state = state;
    Ok(result)
}
