//! Referee configuration.
//!
//! Round count and ruleset are fixed. What can vary is how the opponent
//! is seeded and whether the console prints the rules up front.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Configuration for a refereed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereeConfig {
    /// Seed for the uniform opponent. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Print the rules banner before the first round.
    pub show_rules: bool,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            show_rules: true,
        }
    }
}

impl RefereeConfig {
    /// Set a fixed opponent seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Toggle the rules banner.
    #[must_use]
    pub fn with_rules(mut self, show: bool) -> Self {
        self.show_rules = show;
        self
    }

    /// Build the opponent RNG this configuration asks for.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
