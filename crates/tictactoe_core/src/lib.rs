//! Pure game logic for a two-player 3x3 grid game.
//!
//! # Architecture
//!
//! - **Board**: the grid, occupancy counters, move application and
//!   terminal-state evaluation
//! - **Rules**: line scans for wins, draws and one-move-from-win cells
//! - **Selector**: move choice for scripted participants
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tictactoe_core::{Board, Coordinate, GameStatus, Mark, StrategyTier, select_move};
//!
//! let mut board = Board::new();
//! board.apply_move(Coordinate::new(0, 0), Mark::X)?;
//! board.apply_move(Coordinate::new(0, 1), Mark::X)?;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let block = select_move(&board, Mark::O, StrategyTier::Strong, &mut rng);
//! assert_eq!(block, Some(Coordinate::new(0, 2)));
//! assert_eq!(board.evaluate(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_core::CellOccupiedError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod rules;
mod selector;
mod types;
mod verification;

pub use board::Board;
pub use error::CellOccupiedError;
pub use selector::{StrategyTier, select_move};
pub use types::{CELLS, Coordinate, GameStatus, Mark, SIZE, WinOpportunity};
