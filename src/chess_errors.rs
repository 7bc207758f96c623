//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single recoverable error type of the crate. It covers
//! malformed user input (square and move text, board layouts, engine
//! options) and requests that are well-formed but not legal in the current
//! position.
//!
//! Usage guidelines:
//! - Parsing and lookup helpers return `Result<..., ChessError>`.
//! - Out-of-range square coordinates are programming errors and panic in
//!   `Square::new`; they are never reported through this type.
//! - Running out of legal moves is not an error: an empty move list together
//!   with the in-check flag signals checkmate or stalemate.

use std::error::Error;
use std::fmt;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square in algebraic form (for example `e4`) failed to parse.
    InvalidAlgebraicSquare(String),

    /// A move in long algebraic form (for example `e2e4`) failed to parse.
    InvalidMoveText(String),

    /// The requested move is well-formed but not among the legal moves.
    ///
    /// Payload: the move in long algebraic form.
    IllegalMove(String),

    /// A board layout failed validation.
    InvalidLayout(String),

    /// An engine option name or value was rejected.
    ///
    /// Payload: (option name, offending value)
    InvalidOption(String, String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidAlgebraicSquare(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
            ChessError::InvalidMoveText(text) => write!(f, "invalid move text: {text}"),
            ChessError::IllegalMove(text) => write!(f, "illegal move in this position: {text}"),
            ChessError::InvalidLayout(msg) => write!(f, "invalid board layout: {msg}"),
            ChessError::InvalidOption(name, value) => {
                write!(f, "invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl Error for ChessError {}
