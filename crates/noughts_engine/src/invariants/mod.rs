//! First-class invariants for a match.
//!
//! Invariants are logical properties that must hold throughout a match.
//! They are checked after every move in debug builds and can be tested
//! independently.

use crate::action::MoveError;
use crate::game::MatchState;

pub mod alternating_turn;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A property of a state `S` that every legal transition preserves.
pub trait Invariant<S> {
    /// Whether the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;

    /// `None` if the property holds, otherwise a violation naming it.
    fn check(state: &S) -> Option<InvariantViolation> {
        (!Self::holds(state)).then(|| InvariantViolation::new(Self::description()))
    }
}

/// A broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_new::new)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Statement of the property that failed.
    #[new(into)]
    pub description: String,
}

/// Several invariants checked as one.
pub trait InvariantSet<S> {
    /// Every violation in the set, in declaration order.
    fn violations(state: &S) -> Vec<InvariantViolation>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn violations(state: &S) -> Vec<InvariantViolation> {
        [A::check(state), B::check(state)].into_iter().flatten().collect()
    }
}

/// The invariants enforced on every [`MatchState`].
pub type MatchInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);

/// Runs [`MatchInvariants`] against `state`.
///
/// # Errors
///
/// Returns [`MoveError::InvariantViolation`] listing every failed property.
pub fn check_match(state: &MatchState) -> Result<(), MoveError> {
    let violations = MatchInvariants::violations(state);
    if violations.is_empty() {
        return Ok(());
    }
    let report = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    tracing::error!(%report, moves = state.history().len(), "Match invariant violated");
    Err(MoveError::InvariantViolation(report))
}
