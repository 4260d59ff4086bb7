//! Match orchestration.
//!
//! - `Referee`: owns `MatchState`, plays one round per call, concludes
//! - `OpponentPolicy`: injectable source of bot moves
//! - Reports: `RoundReport` per round, `MatchSummary` at the end

pub mod opponent;
pub mod report;
pub mod session;

pub use opponent::{OpponentPolicy, ScriptedOpponent, UniformOpponent};
pub use report::{MatchResult, MatchSummary, RoundOutcome, RoundReport};
pub use session::Referee;
