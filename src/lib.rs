//! # rps-plus
//!
//! A best-of-three rock-paper-scissors-plus referee.
//!
//! ## Rules
//!
//! - Three rounds per match; invalid input wastes a round
//! - Moves: rock, paper, scissors, and a bomb each side may use once
//! - Bomb beats everything else; bomb vs bomb is a draw
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Validation and resolution are free functions with
//!    no state and no randomness.
//!
//! 2. **Injected Randomness**: The bot's moves come from an
//!    `OpponentPolicy`, seeded or scripted for reproducible matches.
//!
//! 3. **Data Out, Text Outside**: The referee returns reports; the
//!    `console` module is the only place that reads or writes text.
//!
//! ## Modules
//!
//! - `core`: Moves, sides, match state, RNG, configuration
//! - `rules`: Move validation, round resolution, bookkeeping
//! - `referee`: Round orchestration, opponent policies, reports
//! - `console`: Input loop and text rendering

pub mod core;
pub mod rules;
pub mod referee;
pub mod console;

// Re-export commonly used types
pub use crate::core::{GameRng, MatchState, Move, RefereeConfig, Side};

pub use crate::rules::{resolve_round, update_game_state, validate_move, RoundWinner};

pub use crate::referee::{
    MatchResult, MatchSummary, OpponentPolicy, Referee, RoundOutcome, RoundReport,
    ScriptedOpponent, UniformOpponent,
};

pub use crate::console::{run_match, ConsoleError};
