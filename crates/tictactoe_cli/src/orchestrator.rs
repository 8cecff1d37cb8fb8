//! Turn loop between two participants over a line-based console.

use crate::command::{Command, parse_command};
use crate::coordinate::parse_coordinate;
use crate::participant::{Difficulty, Participant};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Coordinate, GameStatus, Mark, select_move};
use tracing::{debug, info, instrument};

/// Drives games over an input/output pair.
///
/// Owns the random generator for every scripted move in the session, so a
/// seeded generator replays the same games for the same input.
pub struct Orchestrator<R, W> {
    input: R,
    output: W,
    rng: StdRng,
    announce_moves: bool,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator that announces scripted moves.
    pub fn new(input: R, output: W, rng: StdRng) -> Self {
        Self {
            input,
            output,
            rng,
            announce_moves: true,
        }
    }

    /// Enables or disables the `Making move level "..."` banner.
    pub fn with_announce_moves(mut self, announce_moves: bool) -> Self {
        self.announce_moves = announce_moves;
        self
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Reads commands until `exit` or end of input, playing a game for each
    /// `start`. Malformed commands are reported and re-prompted.
    #[instrument(skip(self))]
    pub fn run_session(&mut self) -> Result<()> {
        loop {
            write!(self.output, "Input command: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!("Input closed, ending session");
                return Ok(());
            };

            match parse_command(&line) {
                Ok(Command::Start { x, o }) => {
                    self.play(x, o)?;
                }
                Ok(Command::Exit) => {
                    info!("Exit requested");
                    return Ok(());
                }
                Err(e) => {
                    debug!(input = %e.input, "Rejected command");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    /// Plays one game to completion and returns its final status.
    ///
    /// # Errors
    ///
    /// Fails if input closes while a human is to move, or on an I/O error.
    #[instrument(skip(self))]
    pub fn play(&mut self, x: Participant, o: Participant) -> Result<GameStatus> {
        info!("Game started");
        let mut board = Board::new();
        let mut mark = Mark::X;
        writeln!(self.output, "{board}")?;

        let status = loop {
            let participant = if mark == Mark::X { x } else { o };
            match participant {
                Participant::Human => self.human_turn(&mut board, mark)?,
                Participant::Scripted(difficulty) => {
                    self.scripted_turn(&mut board, mark, difficulty)?
                }
            }
            writeln!(self.output, "{board}")?;

            let status = board.evaluate();
            if status.is_over() {
                break status;
            }
            mark = mark.opponent();
        };

        match status {
            GameStatus::Won(winner) => writeln!(self.output, "{winner} wins")?,
            GameStatus::Draw => writeln!(self.output, "Draw")?,
            GameStatus::InProgress => {}
        }
        info!(%status, moves = board.move_count(), "Game over");
        Ok(status)
    }

    /// Prompts until the human names an empty cell, then places `mark`.
    fn human_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        loop {
            write!(self.output, "Enter the coordinates: ")?;
            self.output.flush()?;

            let line = self
                .read_line()?
                .context("Input closed while waiting for coordinates")?;

            let coordinate = match parse_coordinate(&line) {
                Ok(coordinate) => coordinate,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match board.apply_move(coordinate, mark) {
                Ok(()) => {
                    debug!(%mark, %coordinate, "Human move");
                    return Ok(());
                }
                Err(e) => {
                    debug!(error = %e, "Human chose occupied cell");
                    writeln!(self.output, "This cell is occupied! Choose another one!")?;
                }
            }
        }
    }

    fn scripted_turn(
        &mut self,
        board: &mut Board,
        mark: Mark,
        difficulty: Difficulty,
    ) -> Result<()> {
        if self.announce_moves {
            writeln!(self.output, "Making move level \"{difficulty}\"")?;
        }

        let coordinate: Coordinate = select_move(board, mark, difficulty.tier(), &mut self.rng)
            .context("No empty cell left for scripted move")?;
        board.apply_move(coordinate, mark)?;
        debug!(%mark, %coordinate, %difficulty, "Scripted move");
        Ok(())
    }

    /// Next line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
