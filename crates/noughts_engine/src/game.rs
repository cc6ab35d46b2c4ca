//! Turn controller: the state of a single match.

use crate::action::{Move, MoveError};
use crate::rules::{Outcome, WinLine, classify};
use crate::types::{Board, CELLS, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// State of one match: board, side to move, outcome and history.
///
/// `side_to_move` is only meaningful while the outcome is
/// [`Outcome::InProgress`]; once terminal it keeps the last mover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    board: Board,
    side_to_move: Marker,
    outcome: Outcome,
    winning_line: Option<WinLine>,
    history: Vec<Move>,
}

impl MatchState {
    /// Creates a fresh match with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Marker::X,
            outcome: Outcome::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker whose turn it is.
    pub fn side_to_move(&self) -> Marker {
        self.side_to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the line that won the match, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns the committed moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks if the match has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Legal cell indices, empty once the match is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            Vec::new()
        } else {
            self.board.legal_moves()
        }
    }

    /// Validates a move without applying it.
    pub fn check_move(&self, index: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::MatchOver);
        }
        if index >= CELLS {
            return Err(MoveError::IndexOutOfRange(index));
        }
        if !self.board.is_legal(index) {
            return Err(MoveError::CellOccupied(index));
        }
        Ok(())
    }

    /// Plays the side to move at `index` and returns the resulting outcome.
    ///
    /// On error the match is left exactly as it was.
    #[instrument(skip(self), fields(side = %self.side_to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if let Err(e) = self.check_move(index) {
            warn!(index, error = %e, "Rejected move");
            return Err(e);
        }

        let mut next = self.clone();
        let marker = next.side_to_move;
        next.board.place(index, marker);
        next.history.push(Move::new(marker, index));

        let classification = classify(&next.board);
        next.outcome = classification.outcome;
        next.winning_line = classification.winning_line;
        if !next.outcome.is_terminal() {
            next.side_to_move = marker.opponent();
        }

        #[cfg(debug_assertions)]
        crate::invariants::check_match(&next)?;

        *self = next;
        match self.outcome {
            Outcome::InProgress => debug!(index, next = %self.side_to_move, "Move applied"),
            outcome => info!(
                index,
                %outcome,
                line = ?self.winning_line,
                "Match finished"
            ),
        }
        Ok(self.outcome)
    }

    /// Replays `indices` from a fresh match.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for &index in indices {
            state.apply_move(index)?;
        }
        Ok(state)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
