//! Console front end for the 3x3 grid game.
//!
//! # Architecture
//!
//! - **Command**: parses `start <x> <o>` and `exit`
//! - **Participant**: human or scripted, with a difficulty per scripted side
//! - **Coordinate**: turns typed 1-indexed input into board coordinates
//! - **Orchestrator**: the turn loop, rendering and result reporting
//! - **Config**: optional TOML settings (seed, log filter, banner)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod command;
mod config;
mod coordinate;
mod orchestrator;
mod participant;

pub use cli::Cli;
pub use command::{Command, InvalidCommandError, parse_command};
pub use config::{AppConfig, ConfigError};
pub use coordinate::{CoordinateError, parse_coordinate};
pub use orchestrator::Orchestrator;
pub use participant::{Difficulty, Participant};
