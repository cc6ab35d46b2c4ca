//! One-shot board analysis behind the `best-move` and `classify` commands.

use noughts_engine::{Board, BoardError, Marker, Position, Searcher, classify};
use tracing::{debug, instrument};

/// Side to move on `board`: X moves first, so X is to move whenever the
/// counts are level and O when X is one ahead.
pub fn infer_side(board: &Board) -> Marker {
    if board.count(Marker::X) > board.count(Marker::O) {
        Marker::O
    } else {
        Marker::X
    }
}

/// Lines printed by `best-move`: the chosen move with its verdict and node
/// count, then the verdict of every legal move.
///
/// # Errors
///
/// Returns a [`BoardError`] if `board` does not parse.
#[instrument]
pub fn best_move_report(
    board: &str,
    side: Option<Marker>,
    depth: Option<u8>,
) -> Result<Vec<String>, BoardError> {
    let board: Board = board.parse()?;
    let side = side.unwrap_or_else(|| infer_side(&board));
    debug!(%side, "Analysing board");

    let evaluation = Searcher::with_depth(depth).search(&board, side);
    let Some(best) = evaluation.best_move else {
        return Ok(vec![format!("No legal moves: {}", classify(&board).outcome)]);
    };

    let label = Position::from_index(best).map_or("?", Position::label);
    let mut lines = vec![format!(
        "{side} plays {best} ({label}): {} after {} nodes",
        evaluation.verdict, evaluation.nodes
    )];
    lines.extend(
        Searcher::with_depth(depth)
            .evaluate_moves(&board, side)
            .into_iter()
            .map(|(index, verdict)| format!("  {index}: {verdict}")),
    );
    Ok(lines)
}

/// Line printed by `classify`: the outcome, followed by the winning line
/// when there is one.
///
/// # Errors
///
/// Returns a [`BoardError`] if `board` does not parse.
#[instrument]
pub fn classify_report(board: &str) -> Result<String, BoardError> {
    let board: Board = board.parse()?;
    let classification = classify(&board);
    Ok(match classification.winning_line {
        Some(line) => format!("{} {line}", classification.outcome),
        None => classification.outcome.to_string(),
    })
}
