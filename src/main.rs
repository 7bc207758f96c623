//! Self-play driver: two negamax engines play one game and the record is
//! printed.
//!
//! Usage: `mailbox_chess [depth] [max_plies] [seed]`

use std::env;
use std::process::ExitCode;
use std::str::FromStr;

use mailbox_chess::chess_errors::{ChessError, ChessResult};
use mailbox_chess::engines::engine_negamax::NegamaxEngine;
use mailbox_chess::engines::engine_trait::{Engine, GoParams};
use mailbox_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use mailbox_chess::utils::render_game_state::render_game_state;

fn parse_arg<T: FromStr>(args: &[String], index: usize, name: &str, default: T) -> ChessResult<T> {
    match args.get(index) {
        None => Ok(default),
        Some(text) => text
            .parse::<T>()
            .map_err(|_| ChessError::InvalidOption(name.to_owned(), text.clone())),
    }
}

fn run(args: &[String]) -> ChessResult<()> {
    let depth: u8 = parse_arg(args, 1, "depth", 2)?;
    let max_plies: u16 = parse_arg(args, 2, "max_plies", 200)?;
    let seed: u64 = parse_arg(args, 3, "seed", 0)?;

    let mut white = NegamaxEngine::new();
    let mut black = NegamaxEngine::new();
    for (engine, engine_seed) in [(&mut white, seed), (&mut black, seed.wrapping_add(1))] {
        engine.set_option("Depth", &depth.to_string())?;
        engine.set_option("Seed", &engine_seed.to_string())?;
    }

    let config = MatchConfig {
        max_plies,
        go_params: GoParams::default(),
    };
    let result = play_engine_match(&mut white, &mut black, &config)?;

    println!("{}", render_game_state(&result.final_state));
    println!();
    println!("{}", result.report(white.name(), black.name()));
    if let Some(last_info) = result.info_lines.last() {
        println!("{last_info}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
