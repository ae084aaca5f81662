//! Noughts and crosses game engine.
//!
//! A turn-based 3x3 board game with two modes (two local humans, or one
//! human against a scripted opponent) and score tracking across replays.
//! The engine owns all game state and drives its host through a narrow
//! callback contract; rendering, input handling, and dialogs live
//! entirely on the host side.
//!
//! # Architecture
//!
//! - **Engine**: board state, turn sequencing, win/draw detection, scoring
//! - **Strategy**: the scripted opponent's corner/block/complete heuristic
//! - **Frontend**: the callback contract a host implements to present play
//!
//! # Example
//!
//! ```
//! use noughts_crosses::{Frontend, GameEngine, GameMode, GameSession, InvalidMove, Outcome};
//!
//! struct Silent;
//!
//! impl Frontend for Silent {
//!     fn board_changed(&mut self, _session: &GameSession) {}
//!     fn invalid_move(&mut self, _rejection: &InvalidMove) {}
//!     fn game_over(&mut self, _outcome: Outcome, _session: &GameSession) -> bool {
//!         false
//!     }
//! }
//!
//! let mut engine = GameEngine::new(Silent);
//! engine.configure(GameMode::HumanVsCpu);
//! engine.reset().unwrap();
//! // Human opens in the center; the scripted reply lands at (0,0).
//! engine.submit_move(1, 1).unwrap();
//! let session = engine.session().unwrap();
//! assert_eq!(session.scripted_moves().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod frontend;
mod position;
mod rules;
mod session;
mod strategy;
mod types;

pub use engine::{DRAW_POINTS, GameEngine, WIN_POINTS};
pub use error::{EngineError, IllegalCall, InvalidMove};
pub use frontend::{Frontend, Outcome, SCRIPTED_MOVE_DELAY, TurnState};
pub use position::Cell;
pub use rules::{LINES, Verdict, almost_win, verdict};
pub use session::{GameMode, GameSession, Player, PlayerKind};
pub use strategy::select_move;
pub use types::{Board, Mark, Square};
