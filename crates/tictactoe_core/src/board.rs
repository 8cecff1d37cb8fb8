//! The board engine: grid storage, move application and evaluation.

use crate::rules::{check_winner, find_win_opportunities, is_full};
use crate::{CELLS, CellOccupiedError, Coordinate, GameStatus, Mark, SIZE, WinOpportunity};
use tracing::{debug, instrument, warn};

/// 3x3 grid with cached occupancy counters.
///
/// `count_x` and `count_o` always equal the number of X and O marks in
/// `cells`. The only mutation path is [`Board::apply_move`], which keeps the
/// two in step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; SIZE]; SIZE],
    count_x: usize,
    count_o: usize,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` on `coordinate`.
    ///
    /// `mark` must be `X` or `O`. On error the board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CellOccupiedError`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_move(
        &mut self,
        coordinate: Coordinate,
        mark: Mark,
    ) -> Result<(), CellOccupiedError> {
        debug_assert!(!mark.is_empty(), "apply_move requires X or O");

        if self.is_occupied(coordinate) {
            debug!("Rejected move onto occupied cell");
            return Err(CellOccupiedError::new(coordinate));
        }

        self.cells[coordinate.row()][coordinate.column()] = mark;
        match mark {
            Mark::X => self.count_x += 1,
            Mark::O => self.count_o += 1,
            Mark::Empty => {}
        }
        debug_assert!(
            self.counters_consistent(),
            "Occupancy counters out of step with grid"
        );
        Ok(())
    }

    /// Checks that the cached counters match a fresh count of the grid.
    pub fn counters_consistent(&self) -> bool {
        let tally = |mark| self.cells.iter().flatten().filter(|&&m| m == mark).count();
        let valid = tally(Mark::X) == self.count_x && tally(Mark::O) == self.count_o;
        if !valid {
            warn!(
                count_x = self.count_x,
                count_o = self.count_o,
                "Counter consistency violated"
            );
        }
        valid
    }

    /// Returns the mark held by a cell.
    pub fn get(&self, coordinate: Coordinate) -> Mark {
        self.cells[coordinate.row()][coordinate.column()]
    }

    /// Checks if a cell holds a mark.
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        !self.get(coordinate).is_empty()
    }

    /// Number of cells holding `mark`. Counting `Empty` gives the free cells.
    pub fn count(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.count_x,
            Mark::O => self.count_o,
            Mark::Empty => CELLS - self.move_count(),
        }
    }

    /// Total marks placed so far.
    pub fn move_count(&self) -> usize {
        self.count_x + self.count_o
    }

    /// Derives the game status from the grid.
    ///
    /// A completed line wins (first in row, column, diagonal scan order).
    /// Otherwise a full board is a draw.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> GameStatus {
        if let Some(mark) = check_winner(self) {
            GameStatus::Won(mark)
        } else if is_full(self) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Every empty cell that would complete a line, in scan order.
    ///
    /// See [`find_win_opportunities`] for the ordering.
    pub fn win_opportunities(&self) -> Vec<WinOpportunity> {
        find_win_opportunities(self)
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::ALL
            .into_iter()
            .filter(|&coord| !self.is_occupied(coord))
            .collect()
    }

    /// Rows of marks, top to bottom.
    pub fn rows(&self) -> &[[Mark; SIZE]; SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "---------")?;
        for [a, b, c] in &self.cells {
            writeln!(f, "| {a} {b} {c} |")?;
        }
        write!(f, "---------")
    }
}
