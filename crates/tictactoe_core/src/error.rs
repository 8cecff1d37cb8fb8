//! Board error types.

use crate::Coordinate;
use derive_more::{Display, Error};

/// A move targeted a cell that already holds a mark.
///
/// Always recoverable: the grid is left untouched and the caller may retry
/// with another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell {} is already occupied", coordinate)]
pub struct CellOccupiedError {
    /// The occupied cell.
    pub coordinate: Coordinate,
}

impl CellOccupiedError {
    /// Creates an error for the given cell.
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}
