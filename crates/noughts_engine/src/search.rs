//! Exhaustive negamax search.
//!
//! The whole game tree below the given board is explored: no pruning, no
//! transposition table, no move ordering beyond ascending cell index.
//! Each child is searched on its own copy of the board, so the caller's
//! board is never touched.

use crate::policy::PolicyError;
use crate::rules::{classify, has_line};
use crate::types::{Board, Marker};
use serde::{Deserialize, Serialize};
use std::ops::Neg;
use tracing::{debug, instrument};

/// Game-theoretic value of a position for the side being evaluated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The side loses with best play from both sides.
    Loss = -1,
    /// Best play ends in a draw.
    Draw = 0,
    /// The side wins with best play from both sides.
    Win = 1,
}

impl Verdict {
    /// Numeric score: -1, 0 or +1.
    pub fn score(self) -> i8 {
        self as i8
    }
}

impl Neg for Verdict {
    type Output = Verdict;

    fn neg(self) -> Self::Output {
        match self {
            Verdict::Loss => Verdict::Win,
            Verdict::Draw => Verdict::Draw,
            Verdict::Win => Verdict::Loss,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Loss => write!(f, "loss"),
            Verdict::Draw => write!(f, "draw"),
            Verdict::Win => write!(f, "win"),
        }
    }
}

/// Result of a search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Value for the side to move.
    pub verdict: Verdict,
    /// First move (ascending index) achieving `verdict`; `None` on a
    /// terminal board.
    pub best_move: Option<usize>,
    /// Positions visited, the root included.
    pub nodes: u64,
}

/// Static value of `board` for `side`: a line of its own wins, an
/// opponent's line loses, anything else is a draw.
///
/// Used for terminal boards and for boards where the depth cap runs out.
pub fn leaf_verdict(board: &Board, side: Marker) -> Verdict {
    if has_line(board, side) {
        Verdict::Win
    } else if has_line(board, side.opponent()) {
        Verdict::Loss
    } else {
        Verdict::Draw
    }
}

/// Negamax searcher with an optional ply cap and a node counter.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    max_depth: Option<u8>,
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher that explores the full tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a searcher that looks at most `depth` plies ahead.
    ///
    /// A cap of zero is raised to one so the root always yields a move.
    pub fn with_depth(depth: Option<u8>) -> Self {
        Self {
            max_depth: depth.map(|d| d.max(1)),
            nodes: 0,
        }
    }

    /// The ply cap, if any.
    pub fn max_depth(&self) -> Option<u8> {
        self.max_depth
    }

    /// Positions visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `board` with `side` to move.
    #[instrument(skip(self, board), fields(board = %board, side = %side, max_depth = ?self.max_depth))]
    pub fn search(&mut self, board: &Board, side: Marker) -> Evaluation {
        let start = self.nodes;
        let (verdict, best_move) = self.negamax(*board, side, self.max_depth);
        let nodes = self.nodes - start;
        debug!(%verdict, ?best_move, nodes, "Search complete");
        Evaluation {
            verdict,
            best_move,
            nodes,
        }
    }

    /// Values every legal move for `side`, in ascending index order.
    #[instrument(skip(self, board), fields(board = %board, side = %side))]
    pub fn evaluate_moves(&mut self, board: &Board, side: Marker) -> Vec<(usize, Verdict)> {
        if classify(board).outcome.is_terminal() {
            return Vec::new();
        }
        let child_depth = self.max_depth.map(|d| d - 1);
        board
            .legal_moves()
            .into_iter()
            .map(|index| {
                let mut child = board.snapshot();
                child.place(index, side);
                let (child_verdict, _) = self.negamax(child, side.opponent(), child_depth);
                (index, -child_verdict)
            })
            .collect()
    }

    fn negamax(&mut self, board: Board, side: Marker, depth: Option<u8>) -> (Verdict, Option<usize>) {
        self.nodes += 1;

        if classify(&board).outcome.is_terminal() || depth == Some(0) {
            return (leaf_verdict(&board, side), None);
        }

        let child_depth = depth.map(|d| d - 1);
        let mut best: Option<(Verdict, usize)> = None;
        for index in board.legal_moves() {
            let mut child = board.snapshot();
            child.place(index, side);
            let (child_verdict, _) = self.negamax(child, side.opponent(), child_depth);
            let verdict = -child_verdict;
            // Strictly greater: ties keep the lowest index.
            if best.is_none_or(|(best_verdict, _)| verdict > best_verdict) {
                best = Some((verdict, index));
            }
        }

        match best {
            Some((verdict, index)) => (verdict, Some(index)),
            None => (leaf_verdict(&board, side), None),
        }
    }
}

/// Runs a negamax search on `board` for `side`, optionally capped at
/// `depth` plies.
pub fn negamax(board: &Board, side: Marker, depth: Option<u8>) -> Evaluation {
    Searcher::with_depth(depth).search(board, side)
}

/// Optimal move for `marker` on `board` from a full-depth search.
///
/// # Errors
///
/// Returns [`PolicyError::NoLegalMoves`] if the board is won or full.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, marker: Marker) -> Result<usize, PolicyError> {
    negamax(board, marker, None)
        .best_move
        .ok_or(PolicyError::NoLegalMoves)
}
