//! Draw detection.

use crate::{Board, CELLS};
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// Reads the occupancy counters rather than rescanning the grid. A full
/// board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.move_count() == CELLS
}
