//! Match state.
//!
//! ## MatchState
//!
//! Everything the referee tracks across a match:
//! - Round counter (wasted rounds count)
//! - Per-side scores
//! - Per-side bomb flags (sticky for the whole match)
//! - Match-over flag (set once three rounds have been played)
//!
//! Mutation goes through [`crate::rules::update_game_state`] and the
//! bomb-marking helper here. Both only ever move fields forward.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Number of rounds in a match.
pub const ROUNDS_PER_MATCH: u32 = 3;

/// Mutable state of a single best-of-three match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Rounds played so far, wasted ones included.
    pub round_number: u32,
    pub user_score: u32,
    pub bot_score: u32,
    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,
    /// Irreversible once set.
    pub match_over: bool,
}

impl MatchState {
    /// Fresh state: round 0, no score, bombs available.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score of one side.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::User => self.user_score,
            Side::Bot => self.bot_score,
        }
    }

    /// Whether one side has played its bomb.
    #[must_use]
    pub fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Bot => self.bot_bomb_used,
        }
    }

    /// Mark a side's bomb as spent. Idempotent.
    pub fn mark_bomb_used(&mut self, side: Side) {
        match side {
            Side::User => self.user_bomb_used = true,
            Side::Bot => self.bot_bomb_used = true,
        }
    }

    pub(crate) fn add_point(&mut self, side: Side) {
        match side {
            Side::User => self.user_score += 1,
            Side::Bot => self.bot_score += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_zeroed() {
        let state = MatchState::new();

        assert_eq!(state.round_number, 0);
        for side in [Side::User, Side::Bot] {
            assert_eq!(state.score(side), 0);
            assert!(!state.bomb_used(side));
        }
        assert!(!state.match_over);
    }

    #[test]
    fn test_mark_bomb_used_is_sticky() {
        let mut state = MatchState::new();

        state.mark_bomb_used(Side::Bot);
        assert!(state.bot_bomb_used);
        assert!(!state.user_bomb_used);

        state.mark_bomb_used(Side::Bot);
        assert!(state.bomb_used(Side::Bot));
    }

    #[test]
    fn test_add_point() {
        let mut state = MatchState::new();

        state.add_point(Side::User);
        state.add_point(Side::User);
        state.add_point(Side::Bot);

        assert_eq!(state.score(Side::User), 2);
        assert_eq!(state.score(Side::Bot), 1);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = MatchState::new();
        state.round_number = 2;
        state.user_score = 1;
        state.user_bomb_used = true;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
