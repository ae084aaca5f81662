//! The game engine: turn sequencing, terminal detection, scoring.
//!
//! The engine owns the [`GameSession`] and drives its host through the
//! [`Frontend`] callbacks. Everything is synchronous and single-threaded:
//! `submit_move` runs the whole resolution loop, including any chained
//! scripted turns, before returning.

use crate::error::{EngineError, IllegalCall, InvalidMove};
use crate::frontend::{Frontend, Outcome, SCRIPTED_MOVE_DELAY, TurnState};
use crate::position::Cell;
use crate::rules::{self, Verdict};
use crate::session::{GameMode, GameSession, PlayerKind};
use crate::strategy;
use tracing::{debug, info, instrument, warn};

/// Points awarded to the winner of a game.
pub const WIN_POINTS: u32 = 3;

/// Points awarded to every player on a draw.
pub const DRAW_POINTS: u32 = 1;

/// Turn-driven game engine for noughts and crosses.
///
/// The frontend is injected at construction and never rebound, so there
/// is no window where the engine holds a half-initialized host reference.
pub struct GameEngine<F: Frontend> {
    frontend: F,
    session: Option<GameSession>,
}

impl<F: Frontend> GameEngine<F> {
    /// Creates an engine with no session; call [`configure`] before play.
    ///
    /// [`configure`]: GameEngine::configure
    pub fn new(frontend: F) -> Self {
        Self {
            frontend,
            session: None,
        }
    }

    /// Creates an engine around an existing session, for hosts that
    /// build a custom roster.
    pub fn with_session(frontend: F, session: GameSession) -> Self {
        Self {
            frontend,
            session: Some(session),
        }
    }

    /// Establishes the roster for `mode` and installs a fresh board.
    ///
    /// Scores carry over by seat when a session already exists;
    /// otherwise everyone starts at zero.
    #[instrument(skip(self))]
    pub fn configure(&mut self, mode: GameMode) {
        let carried = self
            .session
            .as_ref()
            .map(|s| [s.players()[0].score(), s.players()[1].score()]);
        let mut session = GameSession::new(mode);
        if let Some(scores) = carried {
            session.carry_scores(scores);
        }
        self.session = Some(session);
        if let Some(session) = &self.session {
            self.frontend.board_changed(session);
        }
    }

    /// The current session, if configured.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// The injected frontend.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Mutable access to the injected frontend.
    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// Starts a new game: clears the board, scripted history, and
    /// outcome; seat 0 moves first. Scores and roster are untouched.
    ///
    /// If seat 0 is scripted, the scripted chain plays out before this
    /// returns, exactly as after a human move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<TurnState, EngineError> {
        let Some(session) = self.session.as_mut() else {
            return Err(IllegalCall::NotConfigured.into());
        };
        session.reset();
        info!("session reset");
        self.frontend.board_changed(session);
        if session.current_player().kind() == PlayerKind::Scripted {
            self.play_scripted()?;
            self.resolve()
        } else {
            Ok(TurnState::AwaitingHuman)
        }
    }

    /// Submits a human move at `(col, row)` and resolves the turn.
    ///
    /// An occupied cell is a recoverable [`InvalidMove`]: the rejection
    /// is surfaced through the frontend, nothing mutates, and the same
    /// call can be retried after the user picks another cell. Every
    /// other failure is a host programming error.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, col: usize, row: usize) -> Result<TurnState, EngineError> {
        let Some(session) = self.session.as_mut() else {
            return Err(IllegalCall::NotConfigured.into());
        };
        let cell = Cell::new(col, row).ok_or(IllegalCall::OutOfRange { col, row })?;
        if session.is_over() {
            return Err(IllegalCall::Terminal.into());
        }
        if session.current_player().kind() != PlayerKind::Human {
            return Err(IllegalCall::NotHumansTurn.into());
        }
        if !session.board().is_empty(cell) {
            let rejection = InvalidMove::CellOccupied(cell);
            warn!(%cell, "rejecting move on occupied cell");
            self.frontend.invalid_move(&rejection);
            return Err(rejection.into());
        }

        session.place(cell);
        debug!(%cell, player = session.current_player().name(), "human move applied");
        self.frontend.board_changed(session);
        self.resolve()
    }

    /// The turn-resolution loop shared by human and scripted moves.
    ///
    /// Entered with the current player having just placed a mark.
    /// Terminal verdicts score, notify the frontend once, and either
    /// reset (replay) or park the session in its terminal state. Open
    /// verdicts hand the turn over, resolving scripted seats in place
    /// until a human must act.
    fn resolve(&mut self) -> Result<TurnState, EngineError> {
        loop {
            let Some(session) = self.session.as_mut() else {
                return Err(IllegalCall::NotConfigured.into());
            };
            let mover_seat = session.current_index();
            let mover = session.current_player().mark();
            match rules::verdict(session.board(), mover) {
                Verdict::Win => {
                    session.award(mover_seat, WIN_POINTS);
                    let outcome = Outcome::Winner(mover);
                    session.finish(outcome);
                    info!(winner = %mover, "game won");
                    let replay = self.frontend.game_over(outcome, session);
                    return if replay {
                        self.reset()
                    } else {
                        Ok(TurnState::Terminal(outcome))
                    };
                }
                Verdict::Draw => {
                    session.award_all(DRAW_POINTS);
                    session.finish(Outcome::Draw);
                    info!("game drawn");
                    let replay = self.frontend.game_over(Outcome::Draw, session);
                    return if replay {
                        self.reset()
                    } else {
                        Ok(TurnState::Terminal(Outcome::Draw))
                    };
                }
                Verdict::Open => {
                    session.advance_turn();
                    if session.current_player().kind() == PlayerKind::Scripted {
                        self.play_scripted()?;
                        continue;
                    }
                    return Ok(TurnState::AwaitingHuman);
                }
            }
        }
    }

    /// Computes and applies one scripted move for the current player.
    fn play_scripted(&mut self) -> Result<(), EngineError> {
        self.frontend.pace(SCRIPTED_MOVE_DELAY);
        let Some(session) = self.session.as_mut() else {
            return Err(IllegalCall::NotConfigured.into());
        };
        let move_index = session.scripted_moves().len();
        let cell = strategy::select_move(
            session.board(),
            session.current_player().mark(),
            session.scripted_moves(),
        )
        .ok_or(EngineError::StrategyExhausted { move_index })?;
        session.place(cell);
        session.record_scripted(cell);
        debug!(%cell, move_index, "scripted move applied");
        self.frontend.board_changed(session);
        Ok(())
    }
}
