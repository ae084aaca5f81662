//! Move selection for the scripted opponent.
//!
//! The heuristic is keyed by how many moves the scripted player has made
//! this game (the length of its recorded history), not by how full the
//! board is, so it behaves the same regardless of who moved first.

use crate::position::Cell;
use crate::rules::almost_win;
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

const TOP_LEFT: Cell = Cell::at(0, 0);
const TOP_RIGHT: Cell = Cell::at(2, 0);
const BOTTOM_LEFT: Cell = Cell::at(0, 2);
const BOTTOM_RIGHT: Cell = Cell::at(2, 2);

/// Selects the scripted player's next move.
///
/// `history` is the scripted player's own moves so far this game; its
/// length picks the heuristic branch. Returns `None` when the branch
/// selects no cell, which callers must treat as an internal defect
/// rather than a skipped turn.
#[instrument(skip(board))]
pub fn select_move(board: &Board, cpu: Mark, history: &[Cell]) -> Option<Cell> {
    let choice = match history.len() {
        0 => opening(board),
        1 => blocking(board, cpu).or_else(|| follow_up(board, history[0])),
        2 | 3 => winning(board, cpu)
            .or_else(|| blocking(board, cpu))
            .or_else(|| corner(board))
            .or_else(|| first_empty(board)),
        4 => first_empty(board),
        _ => None,
    };
    debug!(moves_made = history.len(), ?choice, "scripted move selected");
    choice
}

/// First move: top-left corner, falling back to top-right.
fn opening(board: &Board) -> Option<Cell> {
    first_free(board, &[TOP_LEFT, TOP_RIGHT])
}

/// Second move: corner on the diagonal away from the recorded opening.
///
/// Only the two openings the first branch can produce are handled; any
/// other recorded opening selects nothing.
fn follow_up(board: &Board, opening: Cell) -> Option<Cell> {
    if opening == TOP_LEFT {
        first_free(board, &[TOP_RIGHT, BOTTOM_LEFT, BOTTOM_RIGHT])
    } else if opening == TOP_RIGHT {
        first_free(board, &[BOTTOM_RIGHT, BOTTOM_LEFT])
    } else {
        None
    }
}

/// Completes the scripted player's own almost-win.
fn winning(board: &Board, cpu: Mark) -> Option<Cell> {
    almost_win(board, cpu)
}

/// Blocks the opponent's almost-win.
fn blocking(board: &Board, cpu: Mark) -> Option<Cell> {
    almost_win(board, cpu.opponent())
}

/// Bottom corner preference for the mid-game branches.
fn corner(board: &Board) -> Option<Cell> {
    first_free(board, &[BOTTOM_LEFT, BOTTOM_RIGHT])
}

/// First empty cell in column-major scan order.
fn first_empty(board: &Board) -> Option<Cell> {
    Cell::ALL.iter().copied().find(|&cell| board.is_empty(cell))
}

fn first_free(board: &Board, preference: &[Cell]) -> Option<Cell> {
    preference.iter().copied().find(|&cell| board.is_empty(cell))
}
