//! Immutable move record.
//!
//! A `Move` is built once per candidate from a `(from, to, board)` triple.
//! The captured piece and the promotion flag are read from the board at
//! construction time so applying and undoing never has to look them up.
//!
//! Identity is the endpoint pair only: at most one legal move exists between
//! two squares in any position, so the special-move flags never need to take
//! part in equality.

use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::promotion_row;

#[derive(Debug, Clone, Copy, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_pawn_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    /// Ordinary move or capture. Panics when `from` is empty.
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        let Some(piece_moved) = board.get(from) else {
            panic!("no piece to move on {from:?}");
        };
        Self {
            from,
            to,
            piece_moved,
            piece_captured: board.get(to),
            is_pawn_promotion: piece_moved.kind == PieceKind::Pawn
                && to.row == promotion_row(piece_moved.color),
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// Pawn capture onto the en-passant target. The captured pawn sits beside
    /// `from`, not on `to`.
    pub fn en_passant(from: Square, to: Square, board: &Board) -> Self {
        let mut mv = Self::new(from, to, board);
        mv.piece_captured = Some(Piece::new(
            mv.piece_moved.color.opposite(),
            PieceKind::Pawn,
        ));
        mv.is_en_passant = true;
        mv
    }

    /// Two-file king move; the paired rook move happens when applied.
    pub fn castle(from: Square, to: Square, board: &Board) -> Self {
        let mut mv = Self::new(from, to, board);
        mv.is_castle = true;
        mv
    }

    /// Endpoint encoding `fromRow fromCol toRow toCol` as decimal digits.
    #[inline]
    pub fn move_id(&self) -> u16 {
        self.from.row as u16 * 1000
            + self.from.col as u16 * 100
            + self.to.row as u16 * 10
            + self.to.col as u16
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square of the captured piece, which differs from `to` for en passant.
    #[inline]
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::new(self.from.row, self.to.col)
        } else {
            self.to
        }
    }

    #[inline]
    pub fn matches(&self, from: Square, to: Square) -> bool {
        self.from == from && self.to == to
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}
