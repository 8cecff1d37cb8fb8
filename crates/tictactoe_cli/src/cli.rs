//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Console 3x3 grid game against humans or scripted opponents.
///
/// Once running, type `start <x> <o>` where each side is one of
/// `user`, `easy`, `medium` or `hard`, or `exit` to quit.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for scripted moves (overrides the config file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Hide the "Making move level" banner before scripted moves
    #[arg(long)]
    pub quiet: bool,
}
