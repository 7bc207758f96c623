//! Core game state representation.
//!
//! `GameState` is the central model of the engine: the mailbox board plus
//! side to move, tracked king squares, castling rights and en-passant target
//! (each with an undo log), the applied-move history and the repetition
//! table. A single instance is mutated in place by `apply_move` and restored
//! by `undo_move`; search relies on that round trip being exact.
//!
//! Check, pin and terminal flags live in `GameStatus`. They are a cache of
//! the last `legal_moves` call and are never trusted across a make/unmake.

use std::collections::HashMap;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{
    back_rank, starting_board, KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL,
    REPETITION_LIMIT,
};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::board_layout::parse_layout;

/// Check/pin context and terminal flags of the current position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStatus {
    pub in_check: bool,
    pub pins: Vec<PinEntry>,
    pub checks: Vec<CheckEntry>,
    pub checkmate: bool,
    pub stalemate: bool,
    pub repetition: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    LightWinsCheckmate,
    DarkWinsCheckmate,
    DrawStalemate,
    DrawRepetition,
}

impl GameOutcome {
    pub fn result_text(self) -> &'static str {
        match self {
            GameOutcome::LightWinsCheckmate => "1-0 : White wins by checkmate!",
            GameOutcome::DarkWinsCheckmate => "0-1 : Black wins by checkmate!",
            GameOutcome::DrawStalemate => "Draw by stalemate!",
            GameOutcome::DrawRepetition => "Draw by repetition!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// Indexed by `Color::index()`.
    pub king_squares: [Square; 2],

    pub castling_rights: CastlingRights,
    pub castling_log: Vec<CastlingRights>,
    pub en_passant_square: Option<Square>,
    pub en_passant_log: Vec<Option<Square>>,

    pub move_history: Vec<Move>,
    pub repetition_counts: HashMap<String, u8>,

    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial layout, full castling rights, no en-passant target,
    /// empty history.
    pub fn new_game() -> Self {
        Self::from_board(starting_board(), Color::Light, CASTLE_ALL, None)
    }

    /// Build a state around an arbitrary board. Castling rights whose king
    /// or rook is not on its home square are dropped.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
    ) -> Self {
        let light_king = board
            .find_king(Color::Light)
            .unwrap_or(Square::new(back_rank(Color::Light), KING_START_COL));
        let dark_king = board
            .find_king(Color::Dark)
            .unwrap_or(Square::new(back_rank(Color::Dark), KING_START_COL));

        let mut game_state = Self {
            board,
            side_to_move,
            king_squares: [light_king, dark_king],
            castling_rights: 0,
            castling_log: Vec::new(),
            en_passant_square,
            en_passant_log: Vec::new(),
            move_history: Vec::new(),
            repetition_counts: HashMap::new(),
            status: GameStatus::default(),
        };
        game_state.castling_rights = castling_rights & game_state.supported_castling_rights();
        game_state.record_position();
        game_state
    }

    /// Parse rows of two-character piece codes (row 0 first) into a state.
    pub fn from_layout(
        rows: &[&str; 8],
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        let board = parse_layout(rows)?;
        Ok(Self::from_board(board, side_to_move, castling_rights, None))
    }

    /// Return to the standard initial position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.status.in_check
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.status.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.status.stalemate
    }

    /// Advisory threefold-repetition flag; it never blocks move generation.
    #[inline]
    pub fn is_repetition(&self) -> bool {
        self.status.repetition
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    /// Occurrences of the current board, the current one included.
    pub fn repetition_count(&self) -> u8 {
        self.repetition_counts
            .get(&self.board.repetition_key())
            .copied()
            .unwrap_or(0)
    }

    /// Outcome implied by the flags of the last `legal_moves` call.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.status.checkmate {
            Some(match self.side_to_move {
                Color::Light => GameOutcome::DarkWinsCheckmate,
                Color::Dark => GameOutcome::LightWinsCheckmate,
            })
        } else if self.status.stalemate {
            Some(GameOutcome::DrawStalemate)
        } else if self.status.repetition {
            Some(GameOutcome::DrawRepetition)
        } else {
            None
        }
    }

    pub(crate) fn record_position(&mut self) {
        let count = self
            .repetition_counts
            .entry(self.board.repetition_key())
            .or_insert(0);
        *count += 1;
        self.refresh_repetition_flag();
    }

    pub(crate) fn forget_position(&mut self) {
        let key = self.board.repetition_key();
        if let Some(count) = self.repetition_counts.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.repetition_counts.remove(&key);
            }
        }
        self.refresh_repetition_flag();
    }

    fn refresh_repetition_flag(&mut self) {
        self.status.repetition = self.repetition_count() >= REPETITION_LIMIT;
    }

    fn supported_castling_rights(&self) -> CastlingRights {
        let mut supported = 0;
        for color in [Color::Light, Color::Dark] {
            let rank = back_rank(color);
            let king_home = self.board.get(Square::new(rank, KING_START_COL))
                == Some(Piece::new(color, PieceKind::King));
            if !king_home {
                continue;
            }
            let rook = Some(Piece::new(color, PieceKind::Rook));
            if self.board.get(Square::new(rank, KINGSIDE_ROOK_COL)) == rook {
                supported |= kingside_right(color);
            }
            if self.board.get(Square::new(rank, QUEENSIDE_ROOK_COL)) == rook {
                supported |= queenside_right(color);
            }
        }
        supported
    }
}
