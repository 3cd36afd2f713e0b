use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// How many sets a match is played over.
///
/// Not stored with a match; when an existing score is edited the format is
/// inferred from how many sets it contains.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
pub enum MatchFormat {
    #[default]
    #[serde(rename = "bo3")]
    #[strum(to_string = "best of 3", serialize = "bo3", serialize = "best-of-3")]
    BestOf3,
    #[serde(rename = "bo5")]
    #[strum(to_string = "best of 5", serialize = "bo5", serialize = "best-of-5")]
    BestOf5,
}

impl MatchFormat {
    /// Sets a player must win to take the match.
    pub const fn sets_to_win(self) -> u8 {
        match self {
            MatchFormat::BestOf3 => 2,
            MatchFormat::BestOf5 => 3,
        }
    }

    /// Most sets a match in this format can contain.
    pub const fn max_sets(self) -> usize {
        match self {
            MatchFormat::BestOf3 => 3,
            MatchFormat::BestOf5 => 5,
        }
    }

    /// Guess the format of a stored score from its set count: four or more
    /// sets can only be best of 5, anything shorter is taken as best of 3.
    pub const fn infer_from_set_count(sets: usize) -> Self {
        if sets >= 4 {
            MatchFormat::BestOf5
        } else {
            MatchFormat::BestOf3
        }
    }
}

/// Outcome of a match from the logging user's side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MatchResult {
    Win,
    Loss,
}
