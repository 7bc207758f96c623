//! Read-only context shared by the per-piece generators.
//!
//! The context is built once per generation pass from a `CheckReport` and
//! only ever queried. Pins are looked up, never removed, so a pinned queen
//! sees the same pin entry from both its orthogonal and diagonal passes.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckReport;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub side: Color,
    pub in_check: bool,
    pub pins: &'a [PinEntry],
    /// When false, king steps are not tested against enemy attacks.
    pub king_safety: bool,
}

impl<'a> MoveContext<'a> {
    /// Context enforcing pins and king safety.
    pub fn legal(side: Color, report: &'a CheckReport) -> Self {
        Self {
            side,
            in_check: report.in_check,
            pins: &report.pins,
            king_safety: true,
        }
    }

    /// Context applying only the per-piece movement rules.
    pub fn pseudo_legal(side: Color, in_check: bool) -> Self {
        Self {
            side,
            in_check,
            pins: &[],
            king_safety: false,
        }
    }

    #[inline]
    pub fn pin_on(&self, square: Square) -> Option<&PinEntry> {
        self.pins.iter().find(|pin| pin.square == square)
    }

    /// Whether a piece on `from` may travel along `direction`: always when
    /// unpinned, otherwise only along the pin line in either sense.
    #[inline]
    pub fn pin_allows(&self, from: Square, direction: Direction) -> bool {
        match self.pin_on(from) {
            None => true,
            Some(pin) => {
                direction == pin.direction || direction == (-pin.direction.0, -pin.direction.1)
            }
        }
    }
}

/// Squares holding a piece of `color` and `kind`, in row-major order.
pub fn squares_of(game_state: &GameState, color: Color, kind: PieceKind) -> Vec<Square> {
    game_state
        .board
        .occupied()
        .filter(|(_, piece)| piece.is(color, kind))
        .map(|(square, _)| square)
        .collect()
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square, side: Color) -> Option<Piece> {
    game_state
        .board
        .get(square)
        .filter(|piece| piece.color != side)
}

/// Walk each direction from `from`, adding quiet moves until the first
/// occupied square and a capture when that blocker is an enemy.
pub fn slide_moves(
    game_state: &GameState,
    context: &MoveContext,
    from: Square,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        if !context.pin_allows(from, direction) {
            continue;
        }

        for steps in 1..8 {
            let Some(to) = from.offset(direction, steps) else {
                break;
            };
            match game_state.board.get(to) {
                None => out.push(Move::new(from, to, &game_state.board)),
                Some(piece) => {
                    if piece.color != context.side {
                        out.push(Move::new(from, to, &game_state.board));
                    }
                    break;
                }
            }
        }
    }
}
