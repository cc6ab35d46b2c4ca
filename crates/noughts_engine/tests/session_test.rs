//! Session flow against computer opponents and the renderer projection.

use noughts_engine::{Cell, Marker, Opponent, OpponentPolicy, Outcome, Session, WinLine};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Plays the computer whenever it is due, otherwise the lowest legal cell.
fn play_out(session: &mut Session, rng: &mut StdRng) -> Outcome {
    while !session.game().is_over() {
        if session.is_computer_turn() {
            session.play_computer_turn(rng).unwrap();
        } else {
            let index = session.game().legal_moves()[0];
            session.apply_move(index).unwrap();
        }
    }
    session.game().outcome()
}

#[test]
fn test_optimal_opponent_beats_naive_play() {
    let mut session = Session::new("Ada", "Computer", Opponent::Optimal, None);
    let mut rng = StdRng::seed_from_u64(3);
    let outcome = play_out(&mut session, &mut rng);
    assert_ne!(outcome, Outcome::Won(Marker::X));
}

#[test]
fn test_scores_accumulate_across_matches() {
    let mut session = Session::new("Ada", "Computer", Opponent::Optimal, None);
    let mut rng = StdRng::seed_from_u64(3);
    let mut computer_wins = 0;
    let mut draws = 0;
    for _ in 0..3 {
        match play_out(&mut session, &mut rng) {
            Outcome::Won(Marker::O) => computer_wins += 1,
            Outcome::Drawn => draws += 1,
            other => panic!("unexpected outcome {other:?}"),
        }
        session.new_match();
    }
    assert_eq!(session.player(Marker::O).wins, computer_wins);
    assert_eq!(session.player(Marker::X).wins, 0);
    assert_eq!(session.draws(), draws);
}

#[test]
fn test_random_opponent_plays_legal_moves() {
    let mut session = Session::new("Ada", "Dice", Opponent::Random, None);
    assert_eq!(session.policy(), Some(OpponentPolicy::Random));
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        play_out(&mut session, &mut rng);
        let history = session.game().history();
        assert!(history.iter().any(|mov| mov.marker == Marker::O));
        session.new_match();
    }
}

#[test]
fn test_depth_capped_opponent_is_configured() {
    let session = Session::new("Ada", "Shallow", Opponent::Optimal, Some(2));
    assert_eq!(
        session.policy(),
        Some(OpponentPolicy::Optimal { depth: Some(2) })
    );
}

#[test]
fn test_snapshot_reflects_finished_match() {
    let mut session = Session::new("Ada", "Grace", Opponent::Human, None);
    for index in [0, 3, 1, 4, 2] {
        session.apply_move(index).unwrap();
    }
    let view = session.snapshot();
    assert_eq!(view.outcome, Outcome::Won(Marker::X));
    assert_eq!(view.winning_line, Some(WinLine([0, 1, 2])));
    assert!(view.legal_moves.is_empty());
    assert_eq!(view.cells[0], Cell::Occupied(Marker::X));
    assert_eq!(view.cells[8], Cell::Empty);
    assert!(view.is_highlighted(1));
    assert!(!view.is_highlighted(3));
    assert_eq!(view.players[0].name, "Ada");
    assert_eq!(view.players[0].wins, 1);
    assert_eq!(view.players[1].marker, Marker::O);
}

#[test]
fn test_snapshot_serializes() {
    let mut session = Session::new("Ada", "Computer", Opponent::Optimal, None);
    session.apply_move(4).unwrap();
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["side_to_move"], "o");
    assert_eq!(json["outcome"], "in_progress");
    assert_eq!(json["cells"][4]["occupied"], "x");
    assert_eq!(json["cells"][0], "empty");
    assert_eq!(json["players"][1]["name"], "Computer");
    assert_eq!(json["legal_moves"].as_array().map(Vec::len), Some(8));
}
