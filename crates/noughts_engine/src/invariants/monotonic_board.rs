//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::game::MatchState;
use crate::types::Board;

/// Invariant: the board equals its history replayed onto an empty board,
/// and no history entry ever targets an occupied cell.
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    /// Checks a board against an explicit list of `(marker, index)` moves.
    pub fn holds_for(board: &Board, history: &[crate::Move]) -> bool {
        let mut reconstructed = Board::new();
        for mov in history {
            if !reconstructed.place(mov.index, mov.marker) {
                return false;
            }
        }
        reconstructed == *board
    }
}

impl Invariant<MatchState> for MonotonicBoardInvariant {
    fn holds(state: &MatchState) -> bool {
        Self::holds_for(state.board(), state.history())
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
