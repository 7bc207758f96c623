//! Full legal move generation pipeline.
//!
//! Analyzes the side to move's king once, generates every piece's moves
//! against that read-only pin/check context, applies the check-evasion gate
//! and records the resulting check/terminal flags on the game state.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameStatus;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{
    analyze, interdiction_squares, is_square_attacked, CheckReport,
};
use crate::move_generation::legal_move_shared::MoveContext;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;
use crate::utils::move_notation::parse_long_algebraic;

fn generate_with_context(game_state: &GameState, context: &MoveContext) -> Vec<Move> {
    let mut out = Vec::<Move>::with_capacity(64);

    generate_pawn_moves(game_state, context, &mut out);
    generate_knight_moves(game_state, context, &mut out);
    generate_bishop_moves(game_state, context, &mut out);
    generate_rook_moves(game_state, context, &mut out);
    generate_queen_moves(game_state, context, &mut out);
    generate_king_moves(game_state, context, &mut out);

    out
}

impl GameState {
    /// Moves obeying each piece's movement rules, ignoring pins and king
    /// safety. Castling still requires its own preconditions.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let report = analyze(self);
        let context = MoveContext::pseudo_legal(self.side_to_move, report.in_check);
        generate_with_context(self, &context)
    }

    /// Every legal move for the side to move.
    ///
    /// Recomputes the in-check flag, the pin and check lists and the
    /// checkmate/stalemate flags as a side effect. The board itself is never
    /// touched.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let report = analyze(self);
        let moves = self.filter_legal(&report);

        let no_moves = moves.is_empty();
        self.status = GameStatus {
            in_check: report.in_check,
            checkmate: no_moves && report.in_check,
            stalemate: no_moves && !report.in_check,
            repetition: self.status.repetition,
            pins: report.pins,
            checks: report.checks,
        };

        moves
    }

    /// The legal move between two squares, if any.
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.matches(from, to))
    }

    /// Resolve long algebraic text such as `e2e4` against the legal moves.
    ///
    /// A trailing `q` is only accepted on a promotion. Promotion is always to
    /// a queen, so the letter may also be left off.
    pub fn parse_move(&mut self, text: &str) -> ChessResult<Move> {
        let (from, to) = parse_long_algebraic(text)?;
        let has_suffix = text.trim().len() == 5;
        self.find_legal_move(from, to)
            .filter(|mv| mv.is_pawn_promotion || !has_suffix)
            .ok_or_else(|| ChessError::IllegalMove(text.trim().to_owned()))
    }

    fn filter_legal(&self, report: &CheckReport) -> Vec<Move> {
        let side = self.side_to_move;
        let king = self.king_square(side);
        let context = MoveContext::legal(side, report);
        let mut moves = generate_with_context(self, &context);

        if report.is_double_check() {
            moves.retain(|mv| mv.piece_moved.kind == PieceKind::King);
        } else if let Some(check) = report.checks.first() {
            let targets = interdiction_squares(&self.board, king, check);
            moves.retain(|mv| {
                mv.piece_moved.kind == PieceKind::King
                    || mv.is_en_passant
                    || targets.contains(&mv.to)
            });
        }

        // En passant removes two pieces from the board at once, which the
        // single-ray pin scan cannot see; check those captures on a copy.
        moves.retain(|mv| !mv.is_en_passant || self.en_passant_keeps_king_safe(mv));
        moves
    }

    fn en_passant_keeps_king_safe(&self, mv: &Move) -> bool {
        let mut board = self.board.clone();
        board.set(mv.from, None);
        board.set(mv.capture_square(), None);
        board.set(mv.to, Some(mv.piece_moved));
        !is_square_attacked(
            &board,
            self.king_square(self.side_to_move),
            self.side_to_move.opposite(),
        )
    }
}
