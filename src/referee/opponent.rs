//! Opponent policies.
//!
//! The referee never touches randomness directly. Each round it hands the
//! bot's eligible moves to an `OpponentPolicy` and plays whatever comes back.
//!
//! - `UniformOpponent`: uniform choice from a seeded `GameRng`
//! - `ScriptedOpponent`: replays a fixed sequence, for tests and demos

use crate::core::{GameRng, Move};

/// Source of the bot's moves.
pub trait OpponentPolicy {
    /// Choose a move.
    ///
    /// `eligible` always holds the three classic moves, plus bomb while
    /// the bot still has it.
    fn choose(&mut self, eligible: &[Move]) -> Move;
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose(&mut self, eligible: &[Move]) -> Move {
        (**self).choose(eligible)
    }
}

/// Uniform random opponent.
///
/// Selects uniformly from the eligible moves.
#[derive(Clone, Debug)]
pub struct UniformOpponent {
    rng: GameRng,
}

impl UniformOpponent {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Shorthand for `UniformOpponent::new(GameRng::new(seed))`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Seed of the underlying RNG, for replaying a match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl OpponentPolicy for UniformOpponent {
    fn choose(&mut self, eligible: &[Move]) -> Move {
        let choice = self.rng.choose(eligible).copied().unwrap_or(Move::Rock);
        log::trace!("uniform opponent chose {choice} from {} moves", eligible.len());
        choice
    }
}

/// Opponent that replays a fixed sequence of moves, cycling when it runs out.
///
/// Moves are played as scripted even when they are not in `eligible`,
/// so a script can exercise a repeated bomb.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    script: Vec<Move>,
    cursor: usize,
}

impl ScriptedOpponent {
    pub fn new(script: impl IntoIterator<Item = Move>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn played(&self) -> usize {
        self.cursor
    }
}

impl OpponentPolicy for ScriptedOpponent {
    fn choose(&mut self, eligible: &[Move]) -> Move {
        let choice = if self.script.is_empty() {
            eligible.first().copied().unwrap_or(Move::Rock)
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        choice
    }
}
