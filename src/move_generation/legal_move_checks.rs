//! King-safety analysis: checks, absolute pins and square-attack queries.
//!
//! Everything here is a pure scan of the board outward from one square. The
//! square is passed explicitly, so probing a king destination never requires
//! moving the king or touching any tracked state.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::pawn_moves::pawn_capture_directions;
use crate::moves::bishop_moves::is_bishop_direction;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::{is_rook_direction, trace_ray};

/// Pins and checks against one king square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub in_check: bool,
    pub pins: Vec<PinEntry>,
    pub checks: Vec<CheckEntry>,
}

impl CheckReport {
    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Pins and checks for the side to move's king.
pub fn analyze(game_state: &GameState) -> CheckReport {
    let side = game_state.side_to_move;
    scan_pins_and_checks(&game_state.board, game_state.king_square(side), side)
}

/// Scan the 8 lines and the knight offsets around `king` for a king of
/// `color` standing there.
///
/// Along each line the first friendly piece becomes a pin candidate and a
/// second friendly piece closes the line. The first enemy piece either
/// attacks along this line (check, or pin when a candidate exists) or just
/// blocks. A friendly king on the line is looked through so that the scan is
/// also valid for squares the king would move to.
pub fn scan_pins_and_checks(board: &Board, king: Square, color: Color) -> CheckReport {
    let enemy = color.opposite();
    let mut report = CheckReport::default();

    for direction in QUEEN_DIRECTIONS {
        let mut candidate_pin: Option<PinEntry> = None;

        for (step, square) in trace_ray(king, direction).enumerate() {
            let Some(piece) = board.get(square) else {
                continue;
            };

            if piece.color == color {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if candidate_pin.is_none() {
                    candidate_pin = Some(PinEntry { square, direction });
                    continue;
                }
                break;
            }

            if attacks_along_line(piece.kind, enemy, direction, step + 1) {
                match candidate_pin {
                    Some(pin) => report.pins.push(pin),
                    None => {
                        report.in_check = true;
                        report.checks.push(CheckEntry { square, direction });
                    }
                }
            }
            break;
        }
    }

    let enemy_knight = Some(Piece::new(enemy, PieceKind::Knight));
    for offset in KNIGHT_OFFSETS {
        let Some(square) = king.offset(offset, 1) else {
            continue;
        };
        if board.get(square) == enemy_knight {
            report.in_check = true;
            report.checks.push(CheckEntry {
                square,
                direction: offset,
            });
        }
    }

    report
}

/// Whether a piece of `attacker` color found `distance` squares from the
/// scanned square along `direction` attacks it.
fn attacks_along_line(
    kind: PieceKind,
    attacker: Color,
    direction: Direction,
    distance: usize,
) -> bool {
    match kind {
        PieceKind::Rook => is_rook_direction(direction),
        PieceKind::Bishop => is_bishop_direction(direction),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        PieceKind::Pawn => {
            distance == 1
                && is_bishop_direction(direction)
                && pawn_capture_directions(attacker).contains(&(-direction.0, -direction.1))
        }
        PieceKind::Knight => false,
    }
}

/// Whether `attacker` attacks `square`. A king of the defending color is
/// treated as absent.
#[inline]
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    scan_pins_and_checks(board, square, attacker.opposite()).in_check
}

/// Whether the king of `color` is attacked where it currently stands.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(
        &game_state.board,
        game_state.king_square(color),
        color.opposite(),
    )
}

/// Squares a non-king move may land on to answer `check`: the checker itself
/// plus, for line checks, every square between it and the king.
pub fn interdiction_squares(board: &Board, king: Square, check: &CheckEntry) -> Vec<Square> {
    let is_knight = board
        .get(check.square)
        .is_some_and(|piece| piece.kind == PieceKind::Knight);
    if is_knight {
        return vec![check.square];
    }

    let mut squares = Vec::with_capacity(7);
    for square in trace_ray(king, check.direction) {
        squares.push(square);
        if square == check.square {
            break;
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(rows: [&str; 8], side: Color) -> GameState {
        GameState::from_layout(&rows, side, 0).expect("layout should parse")
    }

    #[test]
    fn start_position_has_no_checks_or_pins() {
        let report = analyze(&GameState::new_game());
        assert_eq!(report, CheckReport::default());
    }

    #[test]
    fn rook_behind_friendly_piece_is_a_pin() {
        let game_state = game(
            [
                "-- -- -- -- bR -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wN -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::Light,
        );
        let report = analyze(&game_state);
        assert!(!report.in_check);
        assert_eq!(
            report.pins,
            vec![PinEntry {
                square: Square::new(5, 4),
                direction: (-1, 0)
            }]
        );
    }

    #[test]
    fn two_friendly_blockers_cancel_the_pin() {
        let game_state = game(
            [
                "-- -- -- -- bQ -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wB -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wN -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::Light,
        );
        let report = analyze(&game_state);
        assert!(report.pins.is_empty());
        assert!(!report.in_check);
    }

    #[test]
    fn bishop_on_a_file_neither_checks_nor_pins() {
        let game_state = game(
            [
                "-- -- -- -- bB -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wN -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::Light,
        );
        assert_eq!(analyze(&game_state), CheckReport::default());
    }

    #[test]
    fn pawn_checks_only_towards_its_capture_side() {
        // Dark pawn diagonally in front of the light king gives check.
        let checked = game(
            [
                "-- -- -- -- -- -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- bp -- -- -- --",
                "-- -- -- -- wK -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
            ],
            Color::Light,
        );
        let report = analyze(&checked);
        assert!(report.in_check);
        assert_eq!(report.checks[0].square, Square::new(4, 3));

        // The same pawn behind the king attacks away from it.
        let safe = game(
            [
                "-- -- -- -- -- -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wK -- -- --",
                "-- -- -- bp -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
            ],
            Color::Light,
        );
        assert!(!analyze(&safe).in_check);
    }

    #[test]
    fn knight_and_rook_together_are_a_double_check() {
        let game_state = game(
            [
                "-- -- -- -- bR -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- bN -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::Light,
        );
        let report = analyze(&game_state);
        assert!(report.in_check);
        assert!(report.is_double_check());
    }

    #[test]
    fn attack_query_looks_through_the_defending_king() {
        let game_state = game(
            [
                "-- -- -- -- -- -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "bR -- -- -- wK -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
            ],
            Color::Light,
        );
        // Stepping away from the rook along its own line stays attacked.
        assert!(is_square_attacked(&game_state.board, Square::new(4, 5), Color::Dark));
        assert!(!is_square_attacked(&game_state.board, Square::new(3, 5), Color::Dark));
        assert!(is_king_in_check(&game_state, Color::Light));
    }

    #[test]
    fn interdiction_covers_line_up_to_checker() {
        let game_state = game(
            [
                "-- -- -- -- bR -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::Light,
        );
        let report = analyze(&game_state);
        let squares = interdiction_squares(&game_state.board, Square::new(7, 4), &report.checks[0]);
        assert_eq!(squares.len(), 7);
        assert_eq!(squares.last(), Some(&Square::new(0, 4)));
    }
}
