//! Move selection for scripted participants.

use crate::{Board, Coordinate, Mark};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Strength of a scripted participant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum StrategyTier {
    /// Uniformly random empty cell.
    Weak,
    /// Take a win, else block the first threat found, else random.
    Strong,
}

/// Picks the next cell for `own_mark`.
///
/// Returns `None` only when the board has no empty cell; the turn loop
/// stops asking for moves once [`Board::evaluate`] reports the game over,
/// so callers never hit that case in play.
///
/// With [`StrategyTier::Strong`], a winning cell for `own_mark` is always
/// preferred. Otherwise the first opportunity in scan order is taken, which
/// blocks one opposing threat only, even if several exist.
#[instrument(skip(board, rng))]
pub fn select_move<R>(
    board: &Board,
    own_mark: Mark,
    tier: StrategyTier,
    rng: &mut R,
) -> Option<Coordinate>
where
    R: Rng + ?Sized,
{
    match tier {
        StrategyTier::Weak => random_move(board, rng),
        StrategyTier::Strong => {
            let opportunities = board.win_opportunities();

            if let Some(win) = opportunities.iter().find(|opp| *opp.mark() == own_mark) {
                debug!(cell = %win.target(), "Taking winning cell");
                return Some(*win.target());
            }

            match opportunities.first() {
                Some(threat) => {
                    debug!(cell = %threat.target(), threat = %threat.mark(), "Blocking threat");
                    Some(*threat.target())
                }
                None => random_move(board, rng),
            }
        }
    }
}

/// Uniform choice among the empty cells.
fn random_move<R>(board: &Board, rng: &mut R) -> Option<Coordinate>
where
    R: Rng + ?Sized,
{
    let choice = board.empty_cells().choose(rng).copied();
    debug!(cell = ?choice, "Random cell");
    choice
}
