//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed as (column, row) with both in `[0, 2]`.
///
/// Construct through [`Cell::new`]; out-of-range coordinates are rejected
/// there, which keeps the rest of the crate free of bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    col: u8,
    row: u8,
}

impl Cell {
    /// Creates a cell, returning `None` if either coordinate is out of range.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        if col < 3 && row < 3 {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Compile-time constructor for known-good coordinates.
    pub(crate) const fn at(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Column coordinate (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row coordinate (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Row-major storage index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// All 9 cells in column-major order (column outer, row inner).
    ///
    /// This is the scan order the scripted opponent uses when it falls
    /// back to "first empty cell".
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
