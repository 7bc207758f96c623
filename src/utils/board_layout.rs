//! Board layouts as rows of two-character codes.
//!
//! A layout is 8 rows, row 0 (the dark back rank) first. Each row holds 8
//! whitespace-separated codes: `--` for an empty square, otherwise a color
//! letter (`w`/`b`) followed by a piece letter (`p N B R Q K`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

pub fn parse_layout(rows: &[&str; 8]) -> ChessResult<Board> {
    let mut board = Board::empty();

    for (row, text) in rows.iter().enumerate() {
        let codes: Vec<&str> = text.split_whitespace().collect();
        if codes.len() != 8 {
            return Err(ChessError::InvalidLayout(format!(
                "row {row} has {} squares, expected 8",
                codes.len()
            )));
        }

        for (col, code) in codes.into_iter().enumerate() {
            if code == EMPTY_SQUARE_CODE {
                continue;
            }
            let piece = Piece::from_code(code).ok_or_else(|| {
                ChessError::InvalidLayout(format!("unknown piece code '{code}' in row {row}"))
            })?;
            board.set(Square::new(row as u8, col as u8), Some(piece));
        }
    }

    validate(&board)?;
    Ok(board)
}

fn validate(board: &Board) -> ChessResult<()> {
    for color in [Color::Light, Color::Dark] {
        let kings = board
            .occupied()
            .filter(|(_, piece)| piece.is(color, PieceKind::King))
            .count();
        if kings != 1 {
            return Err(ChessError::InvalidLayout(format!(
                "expected one {color:?} king, found {kings}"
            )));
        }
    }

    let pawn_on_back_rank = board
        .occupied()
        .any(|(square, piece)| piece.kind == PieceKind::Pawn && (square.row == 0 || square.row == 7));
    if pawn_on_back_rank {
        return Err(ChessError::InvalidLayout(
            "pawns cannot stand on the first or last rank".to_owned(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{starting_board, STARTING_LAYOUT};

    #[test]
    fn starting_layout_matches_starting_board() {
        let board = parse_layout(&STARTING_LAYOUT).expect("starting layout should parse");
        assert_eq!(board, starting_board());
    }

    #[test]
    fn rejects_short_rows_and_unknown_codes() {
        let mut rows = STARTING_LAYOUT;
        rows[3] = "-- -- --";
        assert!(matches!(parse_layout(&rows), Err(ChessError::InvalidLayout(_))));

        let mut rows = STARTING_LAYOUT;
        rows[3] = "-- -- -- xK -- -- -- --";
        assert!(matches!(parse_layout(&rows), Err(ChessError::InvalidLayout(_))));
    }

    #[test]
    fn requires_exactly_one_king_per_side() {
        let mut rows = STARTING_LAYOUT;
        rows[0] = "bR bN bB bQ -- bB bN bR";
        assert!(matches!(parse_layout(&rows), Err(ChessError::InvalidLayout(_))));

        let mut rows = STARTING_LAYOUT;
        rows[4] = "-- -- -- -- wK -- -- --";
        assert!(matches!(parse_layout(&rows), Err(ChessError::InvalidLayout(_))));
    }

    #[test]
    fn rejects_pawns_on_the_back_ranks() {
        let mut rows = STARTING_LAYOUT;
        rows[0] = "bR bN bB bQ bK bB bN bp";
        assert!(matches!(parse_layout(&rows), Err(ChessError::InvalidLayout(_))));
    }
}
