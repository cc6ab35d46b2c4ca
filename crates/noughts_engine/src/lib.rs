//! Noughts engine - tic-tac-toe rules and a provably optimal opponent.
//!
//! # Architecture
//!
//! - **Board**: nine cells, legal-move queries, cheap copies
//! - **Rules**: win lines and board classification
//! - **MatchState**: turn state machine for a single match
//! - **Search**: exhaustive negamax over every continuation
//! - **Policy**: random or optimal computer opponents
//! - **Session**: two players and their running score across matches
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Board, Marker, Opponent, Outcome, Session, best_move};
//!
//! assert_eq!(best_move(&Board::new(), Marker::X), Ok(0));
//!
//! let mut session = Session::new("Ada", "Computer", Opponent::Optimal, None);
//! session.apply_move(4).unwrap();
//! let reply = session.play_computer_turn(&mut rand::thread_rng()).unwrap();
//! assert_eq!(reply, 0);
//! assert_eq!(session.game().outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod policy;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use game::MatchState;
pub use policy::{Opponent, OpponentPolicy, PolicyError};
pub use position::Position;
pub use rules::{Classification, Outcome, WIN_LINES, WinLine, classify};
pub use search::{Evaluation, Searcher, Verdict, best_move, negamax};
pub use session::{Player, Session, SessionError};
pub use types::{Board, BoardError, CELLS, Cell, Marker};
pub use view::{PlayerView, SessionView};
