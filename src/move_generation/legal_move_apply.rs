//! In-place make/unmake of moves.
//!
//! `apply_move` pushes onto every log (history, castling rights, en-passant
//! target, repetition table) and `undo_move` pops them in reverse order, so
//! an apply followed by an undo leaves the state equal to what it was.

use crate::game_state::chess_rules::{castle_rook_squares, rook_home_right};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

impl GameState {
    /// Apply a move produced by `legal_moves` for the current position.
    pub fn apply_move(&mut self, mv: Move) {
        let side = mv.piece_moved.color;

        self.board.set(mv.from, None);
        let placed = if mv.is_pawn_promotion {
            Piece::new(side, PieceKind::Queen)
        } else {
            mv.piece_moved
        };
        self.board.set(mv.to, Some(placed));

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[side.index()] = mv.to;
        }

        if mv.is_en_passant {
            self.board.set(mv.capture_square(), None);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(mv.to);
            let rook = self.board.get(rook_from);
            self.board.set(rook_from, None);
            self.board.set(rook_to, rook);
        }

        self.en_passant_log.push(self.en_passant_square);
        self.en_passant_square = double_push_target(&mv);

        self.castling_log.push(self.castling_rights);
        self.castling_rights = updated_castling_rights(self.castling_rights, &mv);

        self.move_history.push(mv);
        self.side_to_move = self.side_to_move.opposite();
        self.record_position();
    }

    /// Revert the last applied move. Does nothing when the history is empty.
    ///
    /// Checkmate and stalemate flags are cleared; the next `legal_moves`
    /// call recomputes them.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_history.pop()?;
        self.forget_position();
        self.side_to_move = self.side_to_move.opposite();

        self.board.set(mv.from, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.board.set(mv.to, None);
            self.board.set(mv.capture_square(), mv.piece_captured);
        } else {
            self.board.set(mv.to, mv.piece_captured);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mv.piece_moved.color.index()] = mv.from;
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(mv.to);
            let rook = self.board.get(rook_to);
            self.board.set(rook_to, None);
            self.board.set(rook_from, rook);
        }

        if let Some(previous) = self.castling_log.pop() {
            self.castling_rights = previous;
        }
        if let Some(previous) = self.en_passant_log.pop() {
            self.en_passant_square = previous;
        }

        self.status.checkmate = false;
        self.status.stalemate = false;
        Some(mv)
    }
}

/// The square skipped by a two-square pawn push, the only time an
/// en-passant target exists.
fn double_push_target(mv: &Move) -> Option<Square> {
    if mv.piece_moved.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2 {
        Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
    } else {
        None
    }
}

fn updated_castling_rights(rights: CastlingRights, mv: &Move) -> CastlingRights {
    let mut rights = rights;
    let side = mv.piece_moved.color;

    match mv.piece_moved.kind {
        PieceKind::King => rights &= !(kingside_right(side) | queenside_right(side)),
        PieceKind::Rook => {
            if let Some(right) = rook_home_right(mv.from) {
                rights &= !right;
            }
        }
        _ => {}
    }

    // Capturing a rook on its home square removes that right too.
    if mv.piece_captured.is_some_and(|piece| piece.kind == PieceKind::Rook) {
        if let Some(right) = rook_home_right(mv.to) {
            rights &= !right;
        }
    }

    rights
}
