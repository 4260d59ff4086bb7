//! Move tokens.
//!
//! Players type moves as free text. The referee normalizes the text
//! (`normalize`) and then parses the lowercase token (`Move::from_token`).
//! Anything that does not parse is an invalid move, which wastes the round.

use serde::{Deserialize, Serialize};

/// A move in rock-paper-scissors-plus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Beats every other move; each side may play it once per match.
    Bomb,
}

impl Move {
    /// Every move, bomb last.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three classic moves.
    pub const CLASSIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Parse a normalized (trimmed, lowercase) token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            "bomb" => Some(Move::Bomb),
            _ => None,
        }
    }

    /// Lowercase token form.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// The classic move this one beats. `None` for bomb.
    #[must_use]
    pub const fn beats(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Scissors => Some(Move::Paper),
            Move::Paper => Some(Move::Rock),
            Move::Bomb => None,
        }
    }

    /// Moves a side may still choose from.
    #[must_use]
    pub fn eligible(bomb_used: bool) -> &'static [Move] {
        if bomb_used {
            &Move::CLASSIC
        } else {
            &Move::ALL
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Trim surrounding whitespace and lowercase raw input.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
