//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::action::Move;
use crate::game::MatchState;
use crate::types::Marker;

/// Invariant: markers alternate starting with X, and while the match is in
/// progress the side to move is the one after the last mover.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    /// Checks alternation over an explicit move list.
    pub fn alternates(history: &[Move]) -> bool {
        if history.first().is_some_and(|first| first.marker != Marker::X) {
            return false;
        }
        history
            .windows(2)
            .all(|pair| pair[0].marker != pair[1].marker)
    }
}

impl Invariant<MatchState> for AlternatingTurnInvariant {
    fn holds(state: &MatchState) -> bool {
        let history = state.history();
        if !Self::alternates(history) {
            return false;
        }
        if state.is_over() {
            return true;
        }
        let expected_next = if history.len() % 2 == 0 {
            Marker::X
        } else {
            Marker::O
        };
        state.side_to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_match_holds() {
        assert!(AlternatingTurnInvariant::holds(&MatchState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let state = MatchState::replay(&[0, 4, 2, 6]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.side_to_move(), Marker::X);
    }

    #[test]
    fn test_same_marker_twice_violates() {
        let history = [Move::new(Marker::X, 0), Move::new(Marker::X, 4)];
        assert!(!AlternatingTurnInvariant::alternates(&history));
    }

    #[test]
    fn test_o_first_violates() {
        let history = [Move::new(Marker::O, 4)];
        assert!(!AlternatingTurnInvariant::alternates(&history));
    }
}
