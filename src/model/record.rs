use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MatchResult, MatchSubmission, ParsedSetScore};
use crate::form::MatchForm;
use crate::score_engine::parse_compact_score;

/// A logged match as kept by the match store.
///
/// The score is the compact string; the format is not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub opponent: String,
    pub played_on: NaiveDate,
    pub score: String,
    pub result: MatchResult,
    pub notes: Option<String>,
}

impl MatchRecord {
    pub fn from_submission(
        opponent: impl Into<String>,
        played_on: NaiveDate,
        submission: MatchSubmission,
        notes: Option<String>,
    ) -> Self {
        Self {
            opponent: opponent.into(),
            played_on,
            score: submission.score,
            result: submission.result,
            notes,
        }
    }

    /// Decode the stored score, dropping anything unreadable.
    pub fn sets(&self) -> Vec<ParsedSetScore> {
        parse_compact_score(&self.score)
    }

    /// A form pre-filled with this record for editing.
    pub fn edit_form(&self) -> MatchForm {
        MatchForm::from_compact_score(&self.score, Some(self.result))
    }
}
