//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search delegates static scoring to this trait so alternate heuristics can
//! be swapped without altering search code.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Score of a checkmated position, overriding any material count.
pub const CHECKMATE_SCORE: i32 = 1000;
pub const STALEMATE_SCORE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Score with positive values favoring the light side.
    ///
    /// Terminal flags are read from `game_state.status`, so the caller must
    /// have enumerated legal moves for this position first.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material values indexed by `PieceKind::index`.
const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 0];

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        PIECE_VALUES[piece.index()]
    }

    pub fn material_balance_light_minus_dark(game_state: &GameState) -> i32 {
        game_state
            .board
            .occupied()
            .map(|(_, piece)| match piece.color {
                Color::Light => Self::piece_value(piece.kind),
                Color::Dark => -Self::piece_value(piece.kind),
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if game_state.is_checkmate() {
            // The side to move is the one mated.
            return match game_state.side_to_move {
                Color::Light => -CHECKMATE_SCORE,
                Color::Dark => CHECKMATE_SCORE,
            };
        }
        if game_state.is_stalemate() {
            return STALEMATE_SCORE;
        }
        Self::material_balance_light_minus_dark(game_state)
    }
}
