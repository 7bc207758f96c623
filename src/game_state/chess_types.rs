//! Core value types shared by every layer of the engine.
//!
//! Squares are `(row, col)` pairs on a mailbox board. Row 0 is the dark back
//! rank and row 7 the light back rank; col 0 is the a-file.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// First character of the two-character piece code.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::Light => 'w',
            Color::Dark => 'b',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Second character of the two-character piece code. Pawns are lower
    /// case so they never collide with file letters in move logs.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'p' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Empty squares are `None` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Parse a two-character code such as `wK` or `bp`.
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let color = match chars.next()? {
            'w' => Color::Light,
            'b' => Color::Dark,
            _ => return None,
        };
        let kind = PieceKind::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(color, kind))
    }
}

/// Code used for empty squares in layouts and repetition keys.
pub const EMPTY_SQUARE_CODE: &str = "--";

/// `(row_step, col_step)` unit step between two squares.
pub type Direction = (i8, i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Panics when either coordinate is off the board.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square ({row}, {col}) is off the board");
        Self { row, col }
    }

    /// The square `steps` steps away along `direction`, if still on the board.
    #[inline]
    pub fn offset(self, direction: Direction, steps: i8) -> Option<Square> {
        let row = self.row as i8 + direction.0 * steps;
        let col = self.col as i8 + direction.1 * steps;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE;

#[inline]
pub const fn kingside_right(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE,
    }
}

#[inline]
pub const fn queenside_right(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_QUEENSIDE,
    }
}

/// A piece pinned to its own king. `direction` points from the king
/// outwards along the pin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEntry {
    pub square: Square,
    pub direction: Direction,
}

/// A piece giving check. `direction` points from the king towards the
/// checker (for knights it is the knight offset itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckEntry {
    pub square: Square,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_parse_back() {
        let queen = Piece::new(Color::Dark, PieceKind::Queen);
        assert_eq!(Piece::from_code("bQ"), Some(queen));
        assert_eq!(Piece::from_code("wp"), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert_eq!(Piece::from_code("--"), None);
        assert_eq!(Piece::from_code("wKx"), None);
    }

    #[test]
    fn offsets_stop_at_board_edge() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset((-1, 0), 1), None);
        assert_eq!(corner.offset((1, 1), 7), Some(Square::new(7, 7)));
        assert_eq!(corner.offset((1, 1), 8), None);
    }

    #[test]
    #[should_panic]
    fn off_board_square_is_a_contract_violation() {
        let _ = Square::new(8, 0);
    }
}
