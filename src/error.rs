//! Error taxonomy for the game engine.
//!
//! Three classes of failure, nothing retryable:
//! - [`InvalidMove`] is a gameplay rejection the user corrects;
//! - [`IllegalCall`] is a presentation-layer bug and fails loudly;
//! - [`EngineError::StrategyExhausted`] is an internal logic defect.

use crate::position::Cell;

/// Recoverable, user-facing move rejection.
///
/// The board is unchanged and the turn has not advanced; the caller
/// should re-prompt the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The target cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    CellOccupied(Cell),
}

impl std::error::Error for InvalidMove {}

/// A call the presentation layer should never have made.
///
/// These indicate a host bug, not a gameplay event, and are never
/// surfaced through the invalid-move callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalCall {
    /// No session exists; `configure` was never called.
    #[display("engine is not configured")]
    NotConfigured,
    /// Coordinates outside the 3x3 board.
    #[display("coordinates ({col}, {row}) are out of range")]
    OutOfRange {
        /// Requested column.
        col: usize,
        /// Requested row.
        row: usize,
    },
    /// A move was submitted while the scripted player is to act.
    #[display("it is not a human player's turn")]
    NotHumansTurn,
    /// A move was submitted after the game ended and before a reset.
    #[display("game is over; reset before submitting moves")]
    Terminal,
}

impl std::error::Error for IllegalCall {}

/// Any failure the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum EngineError {
    /// Recoverable gameplay rejection.
    #[display("{_0}")]
    #[from]
    Invalid(InvalidMove),
    /// Presentation-layer programming error.
    #[display("{_0}")]
    #[from]
    Illegal(IllegalCall),
    /// The scripted heuristic selected no cell. Fatal: the turn must
    /// not be silently skipped.
    #[display("scripted strategy exhausted at move index {move_index}")]
    StrategyExhausted {
        /// How many moves the scripted player had made when selection failed.
        move_index: usize,
    },
}

impl std::error::Error for EngineError {}
