//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Marker};
use serde::{Deserialize, Serialize};

/// Three cell indices that win when one marker owns all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    /// The cell indices of this line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Checks if the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Checks if `marker` owns every cell of the line.
    pub fn owned_by(&self, board: &Board, marker: Marker) -> bool {
        self.0
            .iter()
            .all(|&index| board.cells()[index] == Cell::Occupied(marker))
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// Every winning line, in the order they are checked.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Returns the first line fully owned by `marker`.
pub fn winning_line(board: &Board, marker: Marker) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.owned_by(board, marker))
}

/// Checks if `marker` owns any complete line.
pub fn has_line(board: &Board, marker: Marker) -> bool {
    winning_line(board, marker).is_some()
}
