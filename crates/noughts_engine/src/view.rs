//! Read-only projection of a session for renderers.

use crate::rules::{Outcome, WinLine};
use crate::session::Player;
use crate::types::{CELLS, Cell, Marker};
use serde::{Deserialize, Serialize};

/// A player as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Display name.
    pub name: String,
    /// Marker in use.
    pub marker: Marker,
    /// Matches won in this session.
    pub wins: u32,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            marker: player.marker,
            wins: player.wins,
        }
    }
}

/// Everything a renderer needs to draw the current match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Cells in row-major order.
    pub cells: [Cell; CELLS],
    /// Marker to move (the last mover once the match is over).
    pub side_to_move: Marker,
    /// Match outcome.
    pub outcome: Outcome,
    /// Line to highlight when the match was won.
    pub winning_line: Option<WinLine>,
    /// Cells that accept a click.
    pub legal_moves: Vec<usize>,
    /// Both players, X first.
    pub players: [PlayerView; 2],
    /// Drawn matches in this session.
    pub draws: u32,
}

impl SessionView {
    /// Checks if `index` lies on the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(index))
    }
}
