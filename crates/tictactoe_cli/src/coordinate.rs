//! Translation of typed 1-indexed coordinates.

use derive_more::{Display, Error};
use tictactoe_core::{Coordinate, SIZE};
use tracing::instrument;

/// Typed coordinates that cannot address a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CoordinateError {
    /// Fewer than two tokens, or a token that is not an integer.
    #[display("You should enter numbers!")]
    NotNumbers,
    /// A component outside `1..=3`.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,
}

/// Parses `"<row> <column>"`, both 1-indexed, into a board coordinate.
///
/// Tokens after the second are ignored.
#[instrument]
pub fn parse_coordinate(line: &str) -> Result<Coordinate, CoordinateError> {
    let mut tokens = line.split_whitespace();
    let mut next_number = || {
        tokens
            .next()
            .and_then(|token| token.parse::<i64>().ok())
            .ok_or(CoordinateError::NotNumbers)
    };

    let row = next_number()?;
    let column = next_number()?;

    Ok(Coordinate::new(to_index(row)?, to_index(column)?))
}

fn to_index(value: i64) -> Result<usize, CoordinateError> {
    usize::try_from(value)
        .ok()
        .filter(|v| (1..=SIZE).contains(v))
        .map(|v| v - 1)
        .ok_or(CoordinateError::OutOfRange)
}
