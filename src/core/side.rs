//! The two sides of a match.

use serde::{Deserialize, Serialize};

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human at the console.
    User,
    /// The referee's randomized opponent.
    Bot,
}

