//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

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
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Lowercase glyph used by the board text format.
    pub fn glyph(self) -> char {
        match self {
            Marker::X => 'x',
            Marker::O => 'o',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Errors produced by board queries and board parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(usize),

    /// Board text contained an unknown cell character.
    #[display("Unexpected board character {:?}", _0)]
    InvalidCell(char),

    /// Board text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: every copy is an independent snapshot, which is what
/// the search engine explores instead of the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Returns the cell at the given index.
    pub fn cell_at(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfRange(index))
    }

    /// Places `marker` at `index` if that cell is empty.
    ///
    /// Returns whether the board changed. Occupied or out-of-range cells
    /// are left alone.
    pub fn place(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Occupied(marker);
                true
            }
            _ => false,
        }
    }

    /// Checks if `index` names an empty cell.
    pub fn is_legal(&self, index: usize) -> bool {
        matches!(self.cell_at(index), Ok(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empty cell indices in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..CELLS).filter(|&index| self.cells[index].is_empty()).collect()
    }

    /// Returns an independent copy of the board.
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Counts the cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.marker() == Some(marker))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let glyph = cell.marker().map_or('.', Marker::glyph);
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cells: `x`/`o` (any case) or `.`, `-`, `_` for empty.
    /// Whitespace, `|` and `/` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut count = 0;
        for ch in s.chars() {
            let cell = match ch.to_ascii_lowercase() {
                'x' => Cell::Occupied(Marker::X),
                'o' => Cell::Occupied(Marker::O),
                '.' | '-' | '_' => Cell::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                c => return Err(BoardError::InvalidCell(c)),
            };
            if count < CELLS {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != CELLS {
            return Err(BoardError::WrongLength(count));
        }
        Ok(Self { cells })
    }
}
