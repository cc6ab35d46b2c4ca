//! Session management: two players, their running score, and the
//! current match.

use crate::action::MoveError;
use crate::game::MatchState;
use crate::policy::{Opponent, OpponentPolicy, PolicyError};
use crate::rules::Outcome;
use crate::types::Marker;
use crate::view::{PlayerView, SessionView};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A player seated in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Which marker this player uses.
    pub marker: Marker,
    /// Display name.
    pub name: String,
    /// Matches won in this session.
    #[new(default)]
    pub wins: u32,
}

/// Errors raised by session operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The move was rejected by the match.
    #[display("Invalid move: {}", _0)]
    Move(MoveError),

    /// The computer could not find a move.
    #[display("{}", _0)]
    Policy(PolicyError),

    /// A computer move was requested while a human is to move.
    #[display("It is not the computer's turn")]
    NotComputerTurn,
}

impl std::error::Error for SessionError {}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<PolicyError> for SessionError {
    fn from(err: PolicyError) -> Self {
        Self::Policy(err)
    }
}

/// A sequence of matches between the same two players.
///
/// Player A always plays X and moves first. When the opponent is a
/// computer it sits in seat B and plays O.
#[derive(Debug, Clone)]
pub struct Session {
    player_a: Player,
    player_b: Player,
    opponent: Opponent,
    policy: Option<OpponentPolicy>,
    game: MatchState,
    draws: u32,
}

impl Session {
    /// Creates a session and its first match.
    #[instrument(skip(player_a, player_b))]
    pub fn new(
        player_a: impl Into<String>,
        player_b: impl Into<String>,
        opponent: Opponent,
        search_depth: Option<u8>,
    ) -> Self {
        let player_a = Player::new(Marker::X, player_a.into());
        let player_b = Player::new(Marker::O, player_b.into());
        info!(
            player_a = %player_a.name,
            player_b = %player_b.name,
            %opponent,
            "Creating new session"
        );
        Self {
            player_a,
            player_b,
            opponent,
            policy: opponent.policy(search_depth),
            game: MatchState::new(),
            draws: 0,
        }
    }

    /// The current match.
    pub fn game(&self) -> &MatchState {
        &self.game
    }

    /// Who sits in seat B.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// The computer policy, if seat B is a computer.
    pub fn policy(&self) -> Option<OpponentPolicy> {
        self.policy
    }

    /// Both players, X first.
    pub fn players(&self) -> [&Player; 2] {
        [&self.player_a, &self.player_b]
    }

    /// The player using `marker`.
    pub fn player(&self, marker: Marker) -> &Player {
        match marker {
            Marker::X => &self.player_a,
            Marker::O => &self.player_b,
        }
    }

    fn player_mut(&mut self, marker: Marker) -> &mut Player {
        match marker {
            Marker::X => &mut self.player_a,
            Marker::O => &mut self.player_b,
        }
    }

    /// Drawn matches in this session.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// The computer's marker, if seat B is a computer.
    pub fn computer_marker(&self) -> Option<Marker> {
        self.policy.map(|_| self.player_b.marker)
    }

    /// Checks if the computer is due to move in the current match.
    pub fn is_computer_turn(&self) -> bool {
        !self.game.is_over() && self.computer_marker() == Some(self.game.side_to_move())
    }

    /// Plays `index` for the side to move and credits the winner.
    #[instrument(skip(self), fields(side = %self.game.side_to_move()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, SessionError> {
        let outcome = self.game.apply_move(index)?;
        match outcome {
            Outcome::Won(marker) => {
                let winner = self.player_mut(marker);
                winner.wins += 1;
                info!(winner = %winner.name, wins = winner.wins, "Match won");
            }
            Outcome::Drawn => {
                self.draws += 1;
                info!(draws = self.draws, "Match drawn");
            }
            Outcome::InProgress => {}
        }
        Ok(outcome)
    }

    /// Lets the computer choose and play its move, returning the index.
    #[instrument(skip(self, rng))]
    pub fn play_computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, SessionError> {
        let Some(policy) = self.policy.filter(|_| self.is_computer_turn()) else {
            warn!("Computer move requested out of turn");
            return Err(SessionError::NotComputerTurn);
        };
        let index = policy.choose_move(self.game.board(), self.game.side_to_move(), rng)?;
        self.apply_move(index)?;
        debug!(index, "Computer moved");
        Ok(index)
    }

    /// Starts a fresh match, keeping players and scores.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) {
        info!(
            x_wins = self.player_a.wins,
            o_wins = self.player_b.wins,
            draws = self.draws,
            "Starting new match"
        );
        self.game = MatchState::new();
    }

    /// Clears scores and starts a fresh match.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.player_a.wins = 0;
        self.player_b.wins = 0;
        self.draws = 0;
        self.game = MatchState::new();
    }

    /// Result line for a finished match, `None` while it is in progress.
    pub fn result_message(&self) -> Option<String> {
        match self.game.outcome() {
            Outcome::InProgress => None,
            Outcome::Won(marker) => Some(format!("{} wins!", self.player(marker).name)),
            Outcome::Drawn => Some("It's a draw!".to_string()),
        }
    }

    /// Read-only projection for renderers.
    pub fn snapshot(&self) -> SessionView {
        let game = &self.game;
        SessionView {
            cells: *game.board().cells(),
            side_to_move: game.side_to_move(),
            outcome: game.outcome(),
            winning_line: game.winning_line(),
            legal_moves: game.legal_moves(),
            players: self.players().map(PlayerView::from),
            draws: self.draws,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(session: &mut Session, moves: &[usize]) {
        for &index in moves {
            session.apply_move(index).unwrap();
        }
    }

    #[test]
    fn test_players_take_fixed_markers() {
        let session = Session::new("Ada", "Grace", Opponent::Human, None);
        assert_eq!(session.player(Marker::X).name, "Ada");
        assert_eq!(session.player(Marker::O).name, "Grace");
        assert_eq!(session.computer_marker(), None);
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn test_wins_survive_new_match() {
        let mut session = Session::new("Ada", "Grace", Opponent::Human, None);
        play(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(session.player(Marker::X).wins, 1);
        assert_eq!(session.result_message().as_deref(), Some("Ada wins!"));

        session.new_match();
        assert_eq!(session.game().outcome(), Outcome::InProgress);
        assert!(session.game().history().is_empty());
        assert_eq!(session.player(Marker::X).wins, 1);

        play(&mut session, &[0, 3, 1, 4, 8, 5]);
        assert_eq!(session.player(Marker::O).wins, 1);
        assert_eq!(session.result_message().as_deref(), Some("Grace wins!"));
    }

    #[test]
    fn test_draw_counted() {
        let mut session = Session::new("Ada", "Grace", Opponent::Human, None);
        play(&mut session, &[0, 4, 2, 1, 7, 6, 3, 5, 8]);
        assert_eq!(session.draws(), 1);
        assert_eq!(session.result_message().as_deref(), Some("It's a draw!"));
    }

    #[test]
    fn test_reset_clears_scores() {
        let mut session = Session::new("Ada", "Grace", Opponent::Human, None);
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.reset();
        assert_eq!(session.player(Marker::X).wins, 0);
        assert_eq!(session.draws(), 0);
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn test_rejected_move_does_not_score() {
        let mut session = Session::new("Ada", "Grace", Opponent::Human, None);
        play(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(
            session.apply_move(8),
            Err(SessionError::Move(MoveError::MatchOver))
        );
        assert_eq!(session.player(Marker::X).wins, 1);
    }

    #[test]
    fn test_computer_turn_guard() {
        let mut session = Session::new("Ada", "CPU", Opponent::Optimal, None);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            session.play_computer_turn(&mut rng),
            Err(SessionError::NotComputerTurn)
        );
        session.apply_move(4).unwrap();
        assert!(session.is_computer_turn());
        // Against the center the first drawing reply is the corner at 0.
        assert_eq!(session.play_computer_turn(&mut rng), Ok(0));
        assert_eq!(session.game().side_to_move(), Marker::X);
    }

    #[test]
    fn test_human_session_never_computer_turn() {
        let mut session = Session::new("Ada", "Grace", Opponent::Human, None);
        session.apply_move(4).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            session.play_computer_turn(&mut rng),
            Err(SessionError::NotComputerTurn)
        );
    }
}
