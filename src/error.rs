use crate::model::{MatchFormat, MatchResult};

/// All errors a score submission can be rejected with.
///
/// Every variant is a user-input problem; the form shows the message and
/// stays open for correction. Set-scoped variants carry the 1-based set
/// number.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// A game count is missing from the valid 0..=7 range.
    #[error("set {set}: games must be an integer between 0 and 7.")]
    GamesOutOfRange { set: usize },

    #[error("set {set}: set score cannot be tied.")]
    TiedSet { set: usize },

    /// The game pair is not a finished tennis set (6-0..6-4, 7-5, 7-6).
    #[error("set {set}: invalid set score {user_games}-{opp_games}.")]
    InvalidSetScore {
        set: usize,
        user_games: i64,
        opp_games: i64,
    },

    #[error("set {set}: tiebreak points are required for a 7-6 set.")]
    TiebreakRequired { set: usize },

    #[error("set {set}: tiebreak points must be non-negative integers.")]
    InvalidTiebreakPoints { set: usize },

    #[error("set {set}: the tiebreak winner must reach at least 7 points.")]
    TiebreakWinnerTooLow { set: usize },

    #[error("set {set}: the tiebreak winner must win by at least 2 points.")]
    TiebreakMarginTooSmall { set: usize },

    /// Only one of the two game fields was filled.
    #[error("set {set}: both players' game scores are required.")]
    IncompleteSet { set: usize },

    #[error("set {set}: please fill sets in order without gaps.")]
    SetGap { set: usize },

    #[error("enter at least one set score.")]
    NoSets,

    #[error("match must end when someone wins {sets_to_win} sets for {format}.")]
    MatchUndecided {
        sets_to_win: u8,
        format: MatchFormat,
    },

    #[error("set {set}: extra sets entered after the match is already decided.")]
    ExtraSets { set: usize },

    /// The explicit result override disagrees with the entered sets.
    #[error("result does not match the score (expected {expected}).")]
    ResultMismatch { expected: MatchResult },

    #[error("unknown match result: {value}")]
    UnknownResult { value: String },
}

impl ScoreError {
    /// The 1-based set number this error points at, if it is set-scoped.
    pub fn set_number(&self) -> Option<usize> {
        match self {
            ScoreError::GamesOutOfRange { set }
            | ScoreError::TiedSet { set }
            | ScoreError::InvalidSetScore { set, .. }
            | ScoreError::TiebreakRequired { set }
            | ScoreError::InvalidTiebreakPoints { set }
            | ScoreError::TiebreakWinnerTooLow { set }
            | ScoreError::TiebreakMarginTooSmall { set }
            | ScoreError::IncompleteSet { set }
            | ScoreError::SetGap { set }
            | ScoreError::ExtraSets { set } => Some(*set),
            ScoreError::NoSets
            | ScoreError::MatchUndecided { .. }
            | ScoreError::ResultMismatch { .. }
            | ScoreError::UnknownResult { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
