//! Rules of rock-paper-scissors-plus.
//!
//! Free functions with no dependency on the referee or on randomness.
//! The referee calls into them once per round.

pub mod engine;

pub use engine::{resolve_round, update_game_state, validate_move, RoundWinner};
