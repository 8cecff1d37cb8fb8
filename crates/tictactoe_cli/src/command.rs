//! Startup command parsing.

use crate::participant::Participant;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play one game; `x` moves first.
    Start {
        /// Participant playing X.
        x: Participant,
        /// Participant playing O.
        o: Participant,
    },
    /// Leave the session.
    Exit,
}

/// The command line did not match `start <kind> <kind>` or `exit`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Bad parameters!")]
pub struct InvalidCommandError {
    /// The rejected input.
    pub input: String,
}

impl InvalidCommandError {
    /// Creates an error for the rejected input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Parses `start <kind> <kind>` or `exit`.
///
/// A leading `exit` wins regardless of what follows it.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InvalidCommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let command = match tokens.as_slice() {
        ["exit", ..] => Command::Exit,
        ["start", x, o] => Command::Start {
            x: participant(x, line)?,
            o: participant(o, line)?,
        },
        _ => return Err(InvalidCommandError::new(line)),
    };

    debug!(?command, "Parsed command");
    Ok(command)
}

fn participant(kind: &str, line: &str) -> Result<Participant, InvalidCommandError> {
    Participant::from_kind(kind).ok_or_else(|| InvalidCommandError::new(line))
}
