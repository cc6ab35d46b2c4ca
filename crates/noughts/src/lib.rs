//! Noughts - terminal front end for the noughts engine.
//!
//! # Architecture
//!
//! - **Cli**: `play`, `best-move` and `classify` subcommands
//! - **Analysis**: text reports for the one-shot commands
//! - **Config**: TOML settings with command-line overrides
//! - **Terminal**: line-based renderer driving a [`noughts_engine::Session`]
//!
//! # Example
//!
//! ```
//! use noughts::{GameConfig, Terminal};
//! use std::io::Cursor;
//!
//! let mut session = GameConfig::default().session();
//! let mut terminal = Terminal::new(Cursor::new("5\nq\n"), Vec::new());
//! terminal.run(&mut session, &mut rand::thread_rng()).unwrap();
//! assert_eq!(session.game().history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
mod config;
mod terminal;

pub use config::{ConfigError, GameConfig};
pub use terminal::{Terminal, board_text};
