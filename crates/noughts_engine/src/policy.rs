//! Computer opponent policies.

use crate::rules::classify;
use crate::search::Searcher;
use crate::types::{Board, Marker};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error returned when a policy cannot produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PolicyError {
    /// The board is won or full.
    #[display("No legal moves available")]
    NoLegalMoves,
}

impl std::error::Error for PolicyError {}

/// Who plays the second seat of a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Opponent {
    /// Another human at the same keyboard.
    Human,
    /// Computer picking uniformly among legal moves.
    Random,
    /// Computer playing the negamax move.
    #[default]
    Optimal,
}

impl Opponent {
    /// The computer policy for this opponent, if it is a computer.
    pub fn policy(self, search_depth: Option<u8>) -> Option<OpponentPolicy> {
        match self {
            Opponent::Human => None,
            Opponent::Random => Some(OpponentPolicy::Random),
            Opponent::Optimal => Some(OpponentPolicy::Optimal {
                depth: search_depth,
            }),
        }
    }
}

/// Move selection strategy for a computer player.
///
/// Fixed when a match is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentPolicy {
    /// Uniformly random legal move.
    Random,
    /// Negamax move, optionally capped at `depth` plies.
    Optimal {
        /// Ply cap; `None` searches the full tree.
        depth: Option<u8>,
    },
}

impl OpponentPolicy {
    /// Picks a move for `marker` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::NoLegalMoves`] if the board is won or full.
    #[instrument(skip(self, board, rng), fields(policy = ?self, board = %board))]
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        marker: Marker,
        rng: &mut R,
    ) -> Result<usize, PolicyError> {
        if classify(board).outcome.is_terminal() {
            return Err(PolicyError::NoLegalMoves);
        }

        let index = match self {
            OpponentPolicy::Random => *board
                .legal_moves()
                .choose(rng)
                .ok_or(PolicyError::NoLegalMoves)?,
            OpponentPolicy::Optimal { depth } => Searcher::with_depth(*depth)
                .search(board, marker)
                .best_move
                .ok_or(PolicyError::NoLegalMoves)?,
        };

        debug!(index, %marker, "Policy chose move");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_only_picks_legal_cells() {
        let board: Board = "xo./.x./o..".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let index = OpponentPolicy::Random
                .choose_move(&board, Marker::X, &mut rng)
                .unwrap();
            assert!(board.is_legal(index));
        }
    }

    #[test]
    fn test_random_covers_every_legal_cell() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<usize> = (0..500)
            .map(|_| {
                OpponentPolicy::Random
                    .choose_move(&board, Marker::X, &mut rng)
                    .unwrap()
            })
            .collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_optimal_matches_search() {
        let board: Board = "x../xo./...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let policy = OpponentPolicy::Optimal { depth: None };
        assert_eq!(policy.choose_move(&board, Marker::O, &mut rng), Ok(6));
    }

    #[test]
    fn test_no_moves_on_terminal_board() {
        let won: Board = "xxx/oo./...".parse().unwrap();
        let full: Board = "oox/xxo/oxx".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for policy in [OpponentPolicy::Random, OpponentPolicy::Optimal { depth: None }] {
            assert_eq!(
                policy.choose_move(&won, Marker::O, &mut rng),
                Err(PolicyError::NoLegalMoves)
            );
            assert_eq!(
                policy.choose_move(&full, Marker::X, &mut rng),
                Err(PolicyError::NoLegalMoves)
            );
        }
    }

    #[test]
    fn test_opponent_parsing_and_policy() {
        assert_eq!("Optimal".parse::<Opponent>(), Ok(Opponent::Optimal));
        assert_eq!("random".parse::<Opponent>(), Ok(Opponent::Random));
        assert_eq!(Opponent::Human.to_string(), "human");
        assert_eq!(Opponent::Human.policy(None), None);
        assert_eq!(
            Opponent::Optimal.policy(Some(3)),
            Some(OpponentPolicy::Optimal { depth: Some(3) })
        );
    }
}
