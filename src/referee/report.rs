//! Structured results handed back to the driver.
//!
//! Nothing here is pre-formatted; `console::render` turns these into text.

use serde::{Deserialize, Serialize};

use crate::core::{MatchState, Move, Side};
use crate::rules::RoundWinner;

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    User,
    Bot,
    Draw,
    /// The user's move was invalid; nobody scored.
    Wasted,
}

impl From<RoundWinner> for RoundOutcome {
    fn from(winner: RoundWinner) -> Self {
        match winner {
            RoundWinner::User => RoundOutcome::User,
            RoundWinner::Bot => RoundOutcome::Bot,
            RoundWinner::Draw => RoundOutcome::Draw,
        }
    }
}

/// Result of one `play_round` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    /// Normalized user input. Kept verbatim when invalid.
    pub user_move: String,
    /// Bot move. `None` for wasted rounds, where it is never compared.
    pub bot_move: Option<Move>,
    pub outcome: RoundOutcome,
}

impl RoundReport {
    #[must_use]
    pub fn is_wasted(&self) -> bool {
        self.outcome == RoundOutcome::Wasted
    }
}

/// Overall result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    UserWins,
    BotWins,
    Draw,
}

/// Final score line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub user_score: u32,
    pub bot_score: u32,
    pub result: MatchResult,
}

impl MatchSummary {
    /// Summarize a state by strict score comparison.
    #[must_use]
    pub fn from_state(state: &MatchState) -> Self {
        let user_score = state.score(Side::User);
        let bot_score = state.score(Side::Bot);
        let result = match user_score.cmp(&bot_score) {
            std::cmp::Ordering::Greater => MatchResult::UserWins,
            std::cmp::Ordering::Less => MatchResult::BotWins,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        };
        Self {
            user_score,
            bot_score,
            result,
        }
    }
}
