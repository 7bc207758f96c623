//! Move text: long algebraic (`e2e4`, `e7e8q`) for input and engine output,
//! and a short log form (`Nf3`, `exd5`, `0-0`) for game records.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_square, file_char, square_to_algebraic};

/// Split long algebraic text into its two squares.
///
/// The optional fifth character must be a queen promotion letter; legality
/// is checked by the caller against the generated moves.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square)> {
    let trimmed = text.trim();
    if !trimmed.is_ascii() || !(4..=5).contains(&trimmed.len()) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }
    if trimmed.len() == 5 && !trimmed.ends_with(['q', 'Q']) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let from = algebraic_to_square(&trimmed[0..2])?;
    let to = algebraic_to_square(&trimmed[2..4])?;
    Ok((from, to))
}

impl Move {
    pub fn to_long_algebraic(&self) -> String {
        let mut out = square_to_algebraic(self.from);
        out.push_str(&square_to_algebraic(self.to));
        if self.is_pawn_promotion {
            out.push('q');
        }
        out
    }

    /// Short notation used in move logs. No check or disambiguation marks.
    pub fn to_log_notation(&self) -> String {
        if self.is_castle {
            return if self.to.col == 6 { "0-0" } else { "0-0-0" }.to_owned();
        }

        let target = square_to_algebraic(self.to);
        let mut out = String::new();
        if self.piece_moved.kind == PieceKind::Pawn {
            if self.is_capture() {
                out.push(file_char(self.from));
                out.push('x');
            }
            out.push_str(&target);
            if self.is_pawn_promotion {
                out.push_str("=Q");
            }
        } else {
            out.push(self.piece_moved.kind.code());
            if self.is_capture() {
                out.push('x');
            }
            out.push_str(&target);
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}
