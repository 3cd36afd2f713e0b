//! Pure score operations: compact codec, set and match validation, and the
//! small helpers the match form leans on. Nothing here performs I/O or holds
//! state.

pub(crate) mod compact;
pub(crate) mod validate;

pub use compact::{parse_compact_score, serialize_compact_score};
pub use validate::{validate_match, validate_set};

use crate::error::{Result, ScoreError};
use crate::model::MatchResult;

/// Parse a raw form field to an integer, or `None` when it is blank or not
/// an integer.
pub fn parse_optional_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parse the result override selector. Blank means no override.
pub fn parse_result_field(raw: &str) -> Result<Option<MatchResult>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ScoreError::UnknownResult {
            value: trimmed.to_string(),
        })
}

/// Whether the tiebreak inputs should be visible for a set row.
///
/// True for a 7-6 in either order, and already at 6-6 while the second
/// score is still being typed.
pub fn should_show_tiebreak_fields(user_games: Option<i64>, opp_games: Option<i64>) -> bool {
    match (user_games, opp_games) {
        (Some(user), Some(opp)) => {
            (user.max(opp) == 7 && user.min(opp) == 6) || (user == 6 && opp == 6)
        }
        _ => false,
    }
}
