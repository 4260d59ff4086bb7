//! The referee: owns the match state and plays it one round at a time.

use crate::core::{normalize, MatchState, Move, RefereeConfig, Side};
use crate::rules::{resolve_round, update_game_state, validate_move};

use super::opponent::{OpponentPolicy, UniformOpponent};
use super::report::{MatchSummary, RoundOutcome, RoundReport};

/// Referee for a single best-of-three match.
///
/// ```
/// use rps_plus::referee::{Referee, ScriptedOpponent, RoundOutcome};
/// use rps_plus::core::Move;
///
/// let mut referee = Referee::new(ScriptedOpponent::new([Move::Scissors]));
/// let report = referee.play_round("Rock").unwrap();
///
/// assert_eq!(report.outcome, RoundOutcome::User);
/// assert_eq!(referee.state().user_score, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Referee<O = UniformOpponent> {
    state: MatchState,
    opponent: O,
}

impl Referee<UniformOpponent> {
    /// Referee with a uniform opponent seeded per `config`.
    #[must_use]
    pub fn from_config(config: &RefereeConfig) -> Self {
        Self::new(UniformOpponent::new(config.rng()))
    }
}

impl<O: OpponentPolicy> Referee<O> {
    /// Start a fresh match against `opponent`.
    pub fn new(opponent: O) -> Self {
        Self {
            state: MatchState::new(),
            opponent,
        }
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.match_over
    }

    /// Play one round from raw user input.
    ///
    /// Returns `None` without touching anything once the match is over.
    /// The bot always moves, even when the user's input wastes the round,
    /// and a `"bomb"` token spends that side's bomb whether or not the
    /// move turns out to be valid.
    pub fn play_round(&mut self, raw_input: &str) -> Option<RoundReport> {
        if self.state.match_over {
            log::debug!("round requested after match end; ignoring");
            return None;
        }

        let user_move = normalize(raw_input);
        let valid = validate_move(&user_move, self.state.bomb_used(Side::User));
        let bot_move = self.opponent_move();

        if user_move == Move::Bomb.token() {
            self.state.mark_bomb_used(Side::User);
        }
        if bot_move == Move::Bomb {
            self.state.mark_bomb_used(Side::Bot);
        }

        let round = self.state.round_number + 1;

        let parsed = if valid { Move::from_token(&user_move) } else { None };
        let Some(user) = parsed else {
            log::debug!("round {round}: invalid input {user_move:?}, round wasted");
            update_game_state(&mut self.state, None);
            return Some(RoundReport {
                round,
                user_move,
                bot_move: None,
                outcome: RoundOutcome::Wasted,
            });
        };

        let winner = resolve_round(user, bot_move);
        update_game_state(&mut self.state, Some(winner));
        log::debug!(
            "round {round}: {user} vs {bot_move} -> {winner:?} ({}-{})",
            self.state.user_score,
            self.state.bot_score
        );

        Some(RoundReport {
            round,
            user_move,
            bot_move: Some(bot_move),
            outcome: winner.into(),
        })
    }

    /// Final summary, or `None` while rounds remain.
    #[must_use]
    pub fn conclude(&self) -> Option<MatchSummary> {
        if !self.state.match_over {
            return None;
        }
        let summary = MatchSummary::from_state(&self.state);
        log::info!(
            "match over: {:?} ({}-{})",
            summary.result,
            summary.user_score,
            summary.bot_score
        );
        Some(summary)
    }

    fn opponent_move(&mut self) -> Move {
        let eligible = Move::eligible(self.state.bomb_used(Side::Bot));
        self.opponent.choose(eligible)
    }
}
