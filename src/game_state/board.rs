//! 8x8 mailbox grid of piece occupants.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Iterate over every occupied square in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as u8, col as u8), piece))
            })
        })
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, piece)| piece.is(color, PieceKind::King))
            .map(|(square, _)| square)
    }

    /// Board-only serialization used as the repetition key: 64 two-character
    /// codes in row-major order. Side to move and rights are not included.
    pub fn repetition_key(&self) -> String {
        let mut key = String::with_capacity(128);
        for cells in &self.squares {
            for cell in cells {
                match cell {
                    Some(piece) => {
                        key.push(piece.color.code());
                        key.push(piece.kind.code());
                    }
                    None => key.push_str(EMPTY_SQUARE_CODE),
                }
            }
        }
        key
    }
}
