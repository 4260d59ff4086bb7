//! Rule engine: validation, round resolution, bookkeeping.
//!
//! - `validate_move`: is a normalized token a legal move for a side?
//! - `resolve_round`: who wins a round between two legal moves?
//! - `update_game_state`: advance the round counter and score
//!
//! `validate_move` and `resolve_round` are pure. `update_game_state` only
//! touches the state it is handed.

use serde::{Deserialize, Serialize};

use crate::core::moves::Move;
use crate::core::side::Side;
use crate::core::state::{MatchState, ROUNDS_PER_MATCH};

/// Winner of a single resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    User,
    Bot,
    Draw,
}

impl RoundWinner {
    /// The side that scores, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            RoundWinner::User => Some(Side::User),
            RoundWinner::Bot => Some(Side::Bot),
            RoundWinner::Draw => None,
        }
    }

    /// The same result seen from the other side of the table.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            RoundWinner::User => RoundWinner::Bot,
            RoundWinner::Bot => RoundWinner::User,
            RoundWinner::Draw => RoundWinner::Draw,
        }
    }
}

/// Check a normalized token against the move set.
///
/// Unknown tokens are always rejected. `"bomb"` is rejected once the
/// side has already used it.
#[must_use]
pub fn validate_move(token: &str, bomb_already_used: bool) -> bool {
    match Move::from_token(token) {
        Some(Move::Bomb) => !bomb_already_used,
        Some(_) => true,
        None => false,
    }
}

/// Decide a round.
///
/// Equal moves draw (bomb against bomb included), bomb beats everything
/// else, and the classic cycle decides the rest.
#[must_use]
pub fn resolve_round(user_move: Move, bot_move: Move) -> RoundWinner {
    if user_move == bot_move {
        return RoundWinner::Draw;
    }
    match (user_move, bot_move) {
        (Move::Bomb, _) => RoundWinner::User,
        (_, Move::Bomb) => RoundWinner::Bot,
        _ if user_move.beats() == Some(bot_move) => RoundWinner::User,
        _ => RoundWinner::Bot,
    }
}

/// Record a finished round.
///
/// `None` marks a wasted round: the counter advances, nobody scores.
pub fn update_game_state(state: &mut MatchState, winner: Option<RoundWinner>) {
    state.round_number += 1;

    if let Some(side) = winner.and_then(RoundWinner::side) {
        state.add_point(side);
    }

    if state.round_number >= ROUNDS_PER_MATCH {
        state.match_over = true;
    }
}
