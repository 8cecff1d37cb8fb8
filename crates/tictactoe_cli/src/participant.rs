//! Participant kinds and their move strategies.

use tictactoe_core::StrategyTier;

/// User-facing strength of a scripted participant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Random moves.
    Easy,
    /// Wins when it can, otherwise blocks.
    Medium,
    /// Same heuristic as `Medium`; there is no deeper search.
    Hard,
}

impl Difficulty {
    /// The move-selection tier backing this difficulty.
    pub fn tier(self) -> StrategyTier {
        match self {
            Difficulty::Easy => StrategyTier::Weak,
            Difficulty::Medium | Difficulty::Hard => StrategyTier::Strong,
        }
    }
}

/// Who makes the moves for one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Participant {
    /// Coordinates typed at the console.
    #[display("user")]
    Human,
    /// Moves chosen by the selector.
    #[display("{_0}")]
    Scripted(Difficulty),
}

impl Participant {
    /// Parses a command-line participant kind (`user`, `easy`, `medium`,
    /// `hard`).
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "user" => Some(Participant::Human),
            other => other.parse::<Difficulty>().ok().map(Participant::Scripted),
        }
    }
}
