//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so both the turn controller and the search engine share them.

pub mod classify;
pub mod win;

pub use classify::{Classification, Outcome, classify};
pub use win::{WIN_LINES, WinLine, has_line, winning_line};
