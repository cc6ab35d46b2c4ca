//! Board classification: in progress, won, or drawn.

use super::win::{WinLine, winning_line};
use crate::types::{Board, Marker};
use serde::{Deserialize, Serialize};

/// Outcome of a board or match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    #[default]
    InProgress,
    /// The marker completed a line.
    Won(Marker),
    /// The board is full and nobody has a line.
    Drawn,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Won(marker) => Some(*marker),
            Outcome::InProgress | Outcome::Drawn => None,
        }
    }

    /// Checks if no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(marker) => write!(f, "{marker} wins"),
            Outcome::Drawn => write!(f, "Draw"),
        }
    }
}

/// Outcome together with the line that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Classification {
    /// The board's outcome.
    pub outcome: Outcome,
    /// The completed line, set only for [`Outcome::Won`].
    pub winning_line: Option<WinLine>,
}

/// Classifies a board.
///
/// X's lines are checked before O's, and any line beats a full board.
pub fn classify(board: &Board) -> Classification {
    for marker in [Marker::X, Marker::O] {
        if let Some(line) = winning_line(board, marker) {
            return Classification {
                outcome: Outcome::Won(marker),
                winning_line: Some(line),
            };
        }
    }

    let outcome = if board.is_full() {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    };
    Classification {
        outcome,
        winning_line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        let result = classify(&Board::new());
        assert_eq!(result.outcome, Outcome::InProgress);
        assert_eq!(result.winning_line, None);
    }

    #[test]
    fn test_left_column_win() {
        let mut board: Board = "xo./xo./...".parse().unwrap();
        assert_eq!(classify(&board).outcome, Outcome::InProgress);
        board.place(6, Marker::X);
        let result = classify(&board);
        assert_eq!(result.outcome, Outcome::Won(Marker::X));
        assert_eq!(result.winning_line, Some(WinLine([0, 3, 6])));
    }

    #[test]
    fn test_alternating_rows_report_first_owned_line() {
        // x o x / o x o / x x . : the anti-diagonal is the only line X owns.
        let board: Board = "xox/oxo/xx.".parse().unwrap();
        let result = classify(&board);
        assert_eq!(result.outcome, Outcome::Won(Marker::X));
        assert_eq!(result.winning_line, Some(WinLine([2, 4, 6])));
    }

    #[test]
    fn test_full_board_draw() {
        let board: Board = "oox/xxo/oxx".parse().unwrap();
        let result = classify(&board);
        assert_eq!(result.outcome, Outcome::Drawn);
        assert_eq!(result.winning_line, None);
    }

    #[test]
    fn test_win_beats_full_board() {
        let board: Board = "xxo/oox/xxx".parse().unwrap();
        assert!(board.is_full());
        let result = classify(&board);
        assert_eq!(result.outcome, Outcome::Won(Marker::X));
        assert_eq!(result.winning_line, Some(WinLine([6, 7, 8])));
    }

    #[test]
    fn test_o_wins() {
        let board: Board = "ooo/xx./x..".parse().unwrap();
        assert_eq!(classify(&board).outcome, Outcome::Won(Marker::O));
    }
}
