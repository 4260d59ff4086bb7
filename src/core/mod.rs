//! Core types: moves, sides, match state, RNG, configuration.
//!
//! These are plain data. Rules live in `rules`, orchestration in `referee`.

pub mod moves;
pub mod side;
pub mod rng;
pub mod config;
pub mod state;

pub use moves::{normalize, Move};
pub use side::Side;
pub use rng::GameRng;
pub use config::RefereeConfig;
pub use state::{MatchState, ROUNDS_PER_MATCH};
