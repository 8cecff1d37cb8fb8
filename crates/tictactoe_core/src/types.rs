//! Core domain types for the 3x3 grid game.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Board edge length.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// The symbol held by a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    #[display(" ")]
    Empty,
    /// Mark of the first player.
    #[display("X")]
    X,
    /// Mark of the second player.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for `Empty`.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// A cell address, zero-indexed `(row, column)`.
///
/// Both components are in `0..3`. Translating human-facing 1-indexed input
/// into a `Coordinate` (and rejecting anything out of range) happens before
/// a coordinate reaches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    row: usize,
    column: usize,
}

impl Coordinate {
    /// Every cell in row-major order.
    pub const ALL: [Coordinate; CELLS] = [
        Coordinate::new(0, 0),
        Coordinate::new(0, 1),
        Coordinate::new(0, 2),
        Coordinate::new(1, 0),
        Coordinate::new(1, 1),
        Coordinate::new(1, 2),
        Coordinate::new(2, 0),
        Coordinate::new(2, 1),
        Coordinate::new(2, 2),
    ];

    /// Creates a coordinate. Panics if either component is outside `0..3`.
    pub const fn new(row: usize, column: usize) -> Self {
        assert!(row < SIZE && column < SIZE, "coordinate out of range");
        Self { row, column }
    }

    /// Zero-indexed row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-indexed column.
    pub fn column(self) -> usize {
        self.column
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Current status of a game, derived from the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum GameStatus {
    /// Moves remain and nobody has a line.
    #[display("in progress")]
    InProgress,
    /// Board full without a line.
    #[display("draw")]
    Draw,
    /// A line was completed by the given mark.
    #[display("{_0} wins")]
    Won(Mark),
}

impl GameStatus {
    /// True once the game reached `Draw` or `Won`.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// An empty cell that completes a line when filled with `mark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct WinOpportunity {
    /// The empty cell to fill.
    target: Coordinate,
    /// The mark that wins by filling it.
    mark: Mark,
}

impl WinOpportunity {
    /// Creates a win opportunity.
    pub fn new(target: Coordinate, mark: Mark) -> Self {
        Self { target, mark }
    }
}
