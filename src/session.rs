//! Players and per-game session state.

use crate::frontend::Outcome;
use crate::position::Cell;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How a game is staffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// One human against the scripted opponent.
    HumanVsCpu,
    /// Two local humans sharing the board.
    HumanVsHuman,
}

/// What drives a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves arrive through `submit_move`.
    Human,
    /// Moves are computed by the built-in strategy.
    Scripted,
}

/// A participant in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    mark: Mark,
    score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(name: impl Into<String>, kind: PlayerKind, mark: Mark) -> Self {
        Self {
            name: name.into(),
            kind,
            mark,
            score: 0,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human or scripted.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Points accumulated across games this session.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.score += points;
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

/// One session of play: a board, two players, and whose turn it is.
///
/// Owned exclusively by the engine; hosts receive only shared references
/// for rendering. Scores survive resets, the rest of the state does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current: usize,
    scripted_moves: Vec<Cell>,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Creates a session for the given mode with the standard roster.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        let players = match mode {
            GameMode::HumanVsCpu => [
                Player::new("Player 1", PlayerKind::Human, Mark::Nought),
                Player::new("Computer", PlayerKind::Scripted, Mark::Cross),
            ],
            GameMode::HumanVsHuman => [
                Player::new("Player 1", PlayerKind::Human, Mark::Nought),
                Player::new("Player 2", PlayerKind::Human, Mark::Cross),
            ],
        };
        info!(?mode, "creating game session");
        Self::with_players(players)
    }

    /// Creates a session with a custom roster.
    ///
    /// Seat 0 moves first after every reset, so a roster with a scripted
    /// player in seat 0 gives the scripted opponent the opening move.
    pub fn with_players(players: [Player; 2]) -> Self {
        Self {
            board: Board::new(),
            players,
            current: 0,
            scripted_moves: Vec::new(),
            outcome: None,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, seat 0 first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Seat index of the player to act (0 or 1).
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player to act.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The scripted opponent's moves this game, oldest first.
    pub fn scripted_moves(&self) -> &[Cell] {
        &self.scripted_moves
    }

    /// Terminal outcome, if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Clears the board, scripted history, and outcome for a new game.
    /// Seat 0 moves first. Player identities and scores are untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = 0;
        self.scripted_moves.clear();
        self.outcome = None;
    }

    /// Places the current player's mark. The engine validates emptiness
    /// before calling; the turn does not advance here.
    pub(crate) fn place(&mut self, cell: Cell) {
        let mark = self.current_player().mark();
        self.board.set(cell, Square::Taken(mark));
    }

    /// Records a scripted move in the history the strategy keys off.
    pub(crate) fn record_scripted(&mut self, cell: Cell) {
        self.scripted_moves.push(cell);
    }

    /// Hands the turn to the other seat.
    pub(crate) fn advance_turn(&mut self) {
        self.current = (self.current + 1) % 2;
    }

    /// Marks the game finished.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    pub(crate) fn award(&mut self, seat: usize, points: u32) {
        self.players[seat].award(points);
    }

    pub(crate) fn award_all(&mut self, points: u32) {
        for player in &mut self.players {
            player.award(points);
        }
    }

    /// Copies per-seat scores from a previous roster, used when the
    /// session is rebuilt on reconfiguration.
    pub(crate) fn carry_scores(&mut self, scores: [u32; 2]) {
        for (player, score) in self.players.iter_mut().zip(scores) {
            player.set_score(score);
        }
    }
}
