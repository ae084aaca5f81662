//! Game rules for noughts and crosses.
//!
//! Pure functions over board state: terminal evaluation after a move
//! and the almost-win scan the scripted opponent builds on. Both iterate
//! the same fixed table of the 8 winning lines rather than hand-written
//! per-case branches.

use crate::position::Cell;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning lines in fixed scan order: rows top to bottom, columns
/// left to right, main diagonal, anti-diagonal.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
    [Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)],
    [Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)],
    // Columns
    [Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)],
    [Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)],
    [Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)],
    // Diagonals
    [Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)],
    [Cell::at(2, 0), Cell::at(1, 1), Cell::at(0, 2)],
];

/// Terminal evaluation of a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The mover just completed a line.
    Win,
    /// Board full with no line.
    Draw,
    /// Game continues.
    Open,
}

/// Evaluates the board after `mover` has just placed a mark.
///
/// Only the mover's lines are tested: the mover is the only player who
/// could have just completed one.
#[instrument(skip(board))]
pub fn verdict(board: &Board, mover: Mark) -> Verdict {
    let taken = Square::Taken(mover);
    for line in LINES {
        if line.iter().all(|&cell| board.get(cell) == taken) {
            return Verdict::Win;
        }
    }
    if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::Open
    }
}

/// Finds the first line where `mark` holds exactly two cells and the
/// third is empty, returning that empty cell.
///
/// Lines are scanned in the fixed [`LINES`] order, so a row match is
/// reported before a column or diagonal match.
#[instrument(skip(board))]
pub fn almost_win(board: &Board, mark: Mark) -> Option<Cell> {
    let taken = Square::Taken(mark);
    for line in LINES {
        let held = line.iter().filter(|&&cell| board.get(cell) == taken).count();
        if held == 2 {
            if let Some(&gap) = line.iter().find(|&&cell| board.is_empty(cell)) {
                return Some(gap);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(col: usize, row: usize) -> Cell {
        Cell::new(col, row).unwrap()
    }

    fn board_with(marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(col, row, mark) in marks {
            board.set(cell(col, row), Square::Taken(mark));
        }
        board
    }

    #[test]
    fn test_empty_board_is_open() {
        let board = Board::new();
        assert_eq!(verdict(&board, Mark::Nought), Verdict::Open);
        assert_eq!(verdict(&board, Mark::Cross), Verdict::Open);
    }

    #[test]
    fn test_win_top_row() {
        let board = board_with(&[
            (0, 0, Mark::Nought),
            (1, 0, Mark::Nought),
            (2, 0, Mark::Nought),
        ]);
        assert_eq!(verdict(&board, Mark::Nought), Verdict::Win);
        // The other player did not just win.
        assert_eq!(verdict(&board, Mark::Cross), Verdict::Open);
    }

    #[test]
    fn test_win_column() {
        let board = board_with(&[
            (1, 0, Mark::Cross),
            (1, 1, Mark::Cross),
            (1, 2, Mark::Cross),
        ]);
        assert_eq!(verdict(&board, Mark::Cross), Verdict::Win);
    }

    #[test]
    fn test_win_both_diagonals() {
        let main = board_with(&[
            (0, 0, Mark::Nought),
            (1, 1, Mark::Nought),
            (2, 2, Mark::Nought),
        ]);
        assert_eq!(verdict(&main, Mark::Nought), Verdict::Win);

        let anti = board_with(&[
            (2, 0, Mark::Nought),
            (1, 1, Mark::Nought),
            (0, 2, Mark::Nought),
        ]);
        assert_eq!(verdict(&anti, Mark::Nought), Verdict::Win);
    }

    #[test]
    fn test_full_board_no_line_is_draw() {
        // O X O / X O O / X O X
        let board = board_with(&[
            (0, 0, Mark::Nought),
            (1, 0, Mark::Cross),
            (2, 0, Mark::Nought),
            (0, 1, Mark::Cross),
            (1, 1, Mark::Nought),
            (2, 1, Mark::Nought),
            (0, 2, Mark::Cross),
            (1, 2, Mark::Nought),
            (2, 2, Mark::Cross),
        ]);
        assert_eq!(verdict(&board, Mark::Nought), Verdict::Draw);
        assert_eq!(verdict(&board, Mark::Cross), Verdict::Draw);
    }

    #[test]
    fn test_almost_win_finds_gap() {
        let board = board_with(&[(0, 0, Mark::Nought), (1, 1, Mark::Nought)]);
        assert_eq!(almost_win(&board, Mark::Nought), Some(cell(2, 2)));
    }

    #[test]
    fn test_almost_win_ignores_blocked_lines() {
        let board = board_with(&[
            (0, 0, Mark::Nought),
            (1, 1, Mark::Nought),
            (2, 2, Mark::Cross),
        ]);
        assert_eq!(almost_win(&board, Mark::Nought), None);
    }

    #[test]
    fn test_almost_win_scans_rows_before_columns() {
        // Nought threatens both the middle row (gap at (2,1)) and the
        // left column (gap at (0,2)); the row must be reported first.
        let board = board_with(&[
            (0, 1, Mark::Nought),
            (1, 1, Mark::Nought),
            (0, 0, Mark::Nought),
        ]);
        assert_eq!(almost_win(&board, Mark::Nought), Some(cell(2, 1)));
    }

    #[test]
    fn test_almost_win_none_on_empty_board() {
        assert_eq!(almost_win(&Board::new(), Mark::Cross), None);
    }
}
