use serde::{Deserialize, Serialize};

use super::{MatchResult, SetScore};

/// What a valid set list says about the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub user_sets: u8,
    pub opp_sets: u8,
    pub sets: Vec<SetScore>,
}

/// An accepted form submission, ready to hand to the match store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSubmission {
    /// Compact score string, e.g. `6-4, 3-6, 7-6(4)`.
    pub score: String,
    pub result: MatchResult,
    pub user_sets: u8,
    pub opp_sets: u8,
}
