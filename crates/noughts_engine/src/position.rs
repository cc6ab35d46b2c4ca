//! Named cell positions for human-facing input and output.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell addressed by name. Discriminants are board indices.
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
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum Position {
    /// Index 0.
    #[strum(to_string = "Top-left")]
    TopLeft,
    /// Index 1.
    #[strum(to_string = "Top-center")]
    TopCenter,
    /// Index 2.
    #[strum(to_string = "Top-right")]
    TopRight,
    /// Index 3.
    #[strum(to_string = "Middle-left")]
    MiddleLeft,
    /// Index 4.
    #[strum(to_string = "Center")]
    Center,
    /// Index 5.
    #[strum(to_string = "Middle-right")]
    MiddleRight,
    /// Index 6.
    #[strum(to_string = "Bottom-left")]
    BottomLeft,
    /// Index 7.
    #[strum(to_string = "Bottom-center")]
    BottomCenter,
    /// Index 8.
    #[strum(to_string = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// Human-readable name, e.g. "Bottom-left".
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The position at `index`, if it is on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    /// Reads a keypad number (1-9) or a cell name.
    ///
    /// Names ignore case and punctuation, and any unambiguous prefix
    /// is accepted: "top-l", "center" and "bottom right" all parse.
    #[instrument]
    pub fn parse_input(input: &str) -> Option<Position> {
        let input = input.trim();
        if let Ok(key) = input.parse::<usize>() {
            return key.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = squash(input);
        if wanted.is_empty() {
            return None;
        }
        let mut candidates = Self::iter().filter(|pos| squash(pos.label()).starts_with(&wanted));
        match (candidates.next(), candidates.next()) {
            (Some(pos), None) => Some(pos),
            _ => None,
        }
    }

    /// Positions whose cells are still empty.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        board
            .legal_moves()
            .into_iter()
            .filter_map(Self::from_index)
            .collect()
    }
}

/// Lowercase alphanumerics only, so "Top-left" and "top left" compare equal.
fn squash(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
