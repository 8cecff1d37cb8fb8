//! One-move-from-win detection.

use super::LINES;
use crate::{Board, Mark, WinOpportunity};
use tracing::{instrument, trace};

/// Lists every empty cell that would complete a line, with the mark that
/// completes it.
///
/// Lines are visited in [`LINES`] order. Within a line `[a, b, c]` the
/// sub-patterns are checked as `(a, b) -> c`, `(a, c) -> b`, `(b, c) -> a`.
/// A cell shared by two threatened lines appears once per line.
#[instrument(skip(board))]
pub fn find_win_opportunities(board: &Board) -> Vec<WinOpportunity> {
    let mut found = Vec::new();

    for [a, b, c] in LINES {
        for (first, second, target) in [(a, b, c), (a, c, b), (b, c, a)] {
            let mark = board.get(first);
            if mark != Mark::Empty && mark == board.get(second) && !board.is_occupied(target) {
                trace!(cell = %target, %mark, "Win opportunity");
                found.push(WinOpportunity::new(target, mark));
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;

    #[test]
    fn test_empty_board_has_none() {
        assert!(find_win_opportunities(&Board::new()).is_empty());
    }

    #[test]
    fn test_row_gap_in_middle() {
        let mut board = Board::new();
        board.apply_move(Coordinate::new(2, 0), Mark::O).unwrap();
        board.apply_move(Coordinate::new(2, 2), Mark::O).unwrap();

        assert_eq!(
            find_win_opportunities(&board),
            vec![WinOpportunity::new(Coordinate::new(2, 1), Mark::O)]
        );
    }

    #[test]
    fn test_different_marks_contribute_nothing() {
        let mut board = Board::new();
        board.apply_move(Coordinate::new(0, 0), Mark::X).unwrap();
        board.apply_move(Coordinate::new(0, 1), Mark::O).unwrap();
        assert!(find_win_opportunities(&board).is_empty());
    }

    #[test]
    fn test_full_line_contributes_nothing() {
        let mut board = Board::new();
        for cell in &LINES[0] {
            board.apply_move(*cell, Mark::X).unwrap();
        }
        assert!(find_win_opportunities(&board).is_empty());
    }

    #[test]
    fn test_scan_order_rows_before_columns() {
        // X X .
        // . . .
        // X . .
        let mut board = Board::new();
        board.apply_move(Coordinate::new(0, 0), Mark::X).unwrap();
        board.apply_move(Coordinate::new(0, 1), Mark::X).unwrap();
        board.apply_move(Coordinate::new(2, 0), Mark::X).unwrap();

        let targets: Vec<_> = find_win_opportunities(&board)
            .into_iter()
            .map(|opp| *opp.target())
            .collect();
        assert_eq!(targets, vec![Coordinate::new(0, 2), Coordinate::new(1, 0)]);
    }
}
