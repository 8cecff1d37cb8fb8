//! Game rules for the 3x3 grid.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so move selection can reuse them without touching the grid.

pub mod draw;
pub mod opportunity;
pub mod win;

pub use draw::is_full;
pub use opportunity::find_win_opportunities;
pub use win::check_winner;

use crate::Coordinate;

const fn at(row: usize, column: usize) -> Coordinate {
    Coordinate::new(row, column)
}

/// Every line in canonical scan order: rows 0-2, columns 0-2, main
/// diagonal, anti-diagonal.
pub const LINES: [[Coordinate; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];
