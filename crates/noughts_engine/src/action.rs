//! First-class move records and move errors.

use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// A committed move: a marker placed at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The marker that was placed.
    pub marker: Marker,
    /// The cell index (0-8).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.index)
    }
}

/// Why a move was rejected.
///
/// Every variant leaves the match untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The match has already been won or drawn.
    #[display("Match is already over")]
    MatchOver,

    /// The index does not name a cell.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(usize),

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// A match invariant failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
