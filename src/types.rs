//! Core domain types for noughts and crosses.

use crate::position::Cell;
use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player 1's mark (moves first after a reset).
    #[strum(serialize = "O")]
    Nought,
    /// Player 2's mark.
    #[strum(serialize = "X")]
    Cross,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Nought => Mark::Cross,
            Mark::Cross => Mark::Nought,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed yet.
    Empty,
    /// Square taken by a player's mark.
    Taken(Mark),
}

/// 3x3 noughts and crosses board.
///
/// Squares are stored row-major but addressed only through [`Cell`],
/// so an out-of-range access is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Checks if a cell holds no mark.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ".".to_string(),
                    Square::Taken(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Cell::ALL.iter().all(|&c| board.is_empty(c)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        let cell = Cell::new(1, 2).unwrap();
        board.set(cell, Square::Taken(Mark::Cross));
        assert_eq!(board.get(cell), Square::Taken(Mark::Cross));
        assert!(!board.is_empty(cell));
    }

    #[test]
    fn test_render_shows_marks() {
        let mut board = Board::new();
        board.set(Cell::new(0, 0).unwrap(), Square::Taken(Mark::Nought));
        board.set(Cell::new(2, 0).unwrap(), Square::Taken(Mark::Cross));
        let rendered = board.render();
        assert!(rendered.starts_with("O|.|X"));
    }
}
