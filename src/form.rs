use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{MatchFormat, MatchOutcome, MatchResult, MatchSubmission, SetEntry, SetFields};
use crate::score_engine::{self, parse_result_field, should_show_tiebreak_fields};

/// The state behind the match score form.
///
/// Holds the raw per-set text exactly as typed, the chosen format and the
/// optional result override. Callers own its lifecycle; every operation is a
/// pure function of the current state.
///
/// # Examples
///
/// ```
/// use tennis_score::{MatchForm, MatchFormat, MatchResult, SetFields};
///
/// let mut form = MatchForm::new(MatchFormat::BestOf3);
/// form.sets[0] = SetFields::new("6", "4");
/// form.sets[1] = SetFields::new("3", "6");
/// form.sets[2] = SetFields::new("7", "6").with_tiebreak("7", "4");
///
/// let submission = form.submit()?;
/// assert_eq!(submission.score, "6-4, 3-6, 7-6(4)");
/// assert_eq!(submission.result, MatchResult::Win);
/// # Ok::<(), tennis_score::ScoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchForm {
    pub format: MatchFormat,
    #[serde(default, deserialize_with = "deserialize_result_field")]
    pub result: Option<MatchResult>,
    pub sets: Vec<SetFields>,
}

impl MatchForm {
    /// A blank form with one row per possible set.
    pub fn new(format: MatchFormat) -> Self {
        Self {
            format,
            result: None,
            sets: vec![SetFields::default(); format.max_sets()],
        }
    }

    /// Repopulate the form from a stored compact score.
    ///
    /// The format is guessed from the number of sets and winner tiebreak
    /// points are reconstructed, see [`crate::ParsedSetScore::to_fields`].
    #[instrument]
    pub fn from_compact_score(score: &str, result: Option<MatchResult>) -> Self {
        let parsed = score_engine::parse_compact_score(score);
        let format = MatchFormat::infer_from_set_count(parsed.len());
        let mut form = Self {
            format,
            result,
            sets: parsed.iter().map(|set| set.to_fields()).collect(),
        };
        form.pad_rows();
        debug!(sets = parsed.len(), %format, "loaded stored score");
        form
    }

    /// Switch format. Rows are added for a longer format but typed rows are
    /// never dropped; extra ones are reported on submit.
    pub fn set_format(&mut self, format: MatchFormat) {
        self.format = format;
        self.pad_rows();
    }

    /// Whether row `index` should show its tiebreak inputs.
    pub fn show_tiebreak_fields(&self, index: usize) -> bool {
        self.sets.get(index).is_some_and(|fields| {
            let entry = fields.parse();
            should_show_tiebreak_fields(entry.user_games, entry.opp_games)
        })
    }

    pub fn entries(&self) -> Vec<SetEntry> {
        self.sets.iter().map(SetFields::parse).collect()
    }

    pub fn validate(&self) -> Result<MatchOutcome> {
        score_engine::validate_match(&self.entries(), self.format, self.result)
    }

    /// Validate the form and produce the compact score to store.
    #[instrument(skip(self), fields(format = %self.format))]
    pub fn submit(&self) -> Result<MatchSubmission> {
        let outcome = self.validate().inspect_err(|e| {
            debug!(error = %e, "score submission rejected");
        })?;
        let score = score_engine::serialize_compact_score(&outcome.sets);
        debug!(
            %score,
            user_sets = outcome.user_sets,
            opp_sets = outcome.opp_sets,
            "score submission accepted"
        );
        Ok(MatchSubmission {
            score,
            result: outcome.result,
            user_sets: outcome.user_sets,
            opp_sets: outcome.opp_sets,
        })
    }

    fn pad_rows(&mut self) {
        let max_sets = self.format.max_sets();
        if self.sets.len() < max_sets {
            self.sets.resize_with(max_sets, SetFields::default);
        }
    }
}

impl Default for MatchForm {
    fn default() -> Self {
        Self::new(MatchFormat::default())
    }
}

/// Accepts `""`, `null`, `"win"` or `"loss"` from the form's result selector.
fn deserialize_result_field<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<MatchResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        Some(raw) => parse_result_field(&raw).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
