//! Win detection.

use super::LINES;
use crate::{Board, Mark};
use tracing::instrument;

/// Checks if any line holds three identical marks.
///
/// Returns the mark of the first such line in scan order, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a);
        let complete = !mark.is_empty() && mark == board.get(b) && mark == board.get(c);
        complete.then_some(mark)
    })
}
