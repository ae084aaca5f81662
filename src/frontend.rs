//! Presentation-layer contract.
//!
//! The engine drives a host (GUI, TUI, test harness) through this narrow
//! callback interface and nothing more. The host is handed in at engine
//! construction, so there is no partially-bound back-pointer phase.

use crate::error::InvalidMove;
use crate::session::GameSession;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cosmetic pause requested before each scripted move is applied.
pub const SCRIPTED_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Mark),
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Where control sits after an engine operation returns.
///
/// The resolution loop itself is never observable: by the time a call
/// returns, the engine is either waiting on a human or the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// A human player must act next.
    AwaitingHuman,
    /// The game ended; the session stays inspectable until reset.
    Terminal(Outcome),
}

/// Callbacks the engine makes into its host.
pub trait Frontend {
    /// Called after every board mutation (human move, scripted move,
    /// reset) so the host can redraw from the session state.
    fn board_changed(&mut self, session: &GameSession);

    /// Called when a human move is rejected as a gameplay error.
    fn invalid_move(&mut self, rejection: &InvalidMove);

    /// Called exactly once per finished game. Returns whether to start
    /// another round; on `true` the engine resets itself, on `false`
    /// it leaves the terminal session in place for the host to tear down.
    fn game_over(&mut self, outcome: Outcome, session: &GameSession) -> bool;

    /// Optional pacing hint fired before each scripted move so the host
    /// can make rapid scripted play legible. Purely cosmetic; the engine
    /// itself never sleeps.
    fn pace(&mut self, _delay: Duration) {}
}
