use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use tracing::debug;

use crate::model::{ParsedSetScore, SetScore};

static SET_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)-(\d+)(?:\((\d+)\))?$").unwrap_or_else(|_| unreachable!())
});

/// Decode a stored compact score such as `7-6(5), 4-6, 7-6(8)`.
///
/// Best effort: tokens that don't look like a set are skipped, so scores
/// stored under older rules still display.
pub fn parse_compact_score(score: &str) -> Vec<ParsedSetScore> {
    score
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let set = parse_set_token(token);
            if set.is_none() {
                debug!(token, "skipping malformed set token");
            }
            set
        })
        .collect_vec()
}

fn parse_set_token(token: &str) -> Option<ParsedSetScore> {
    let captures = SET_TOKEN.captures(token)?;
    let user_games = captures[1].parse().ok()?;
    let opp_games = captures[2].parse().ok()?;
    let tb_loser_points = match captures.get(3) {
        Some(points) => Some(points.as_str().parse().ok()?),
        None => None,
    };
    Some(ParsedSetScore {
        user_games,
        opp_games,
        tb_loser_points,
    })
}

/// Encode sets as `<user>-<opp>`, with the tiebreak loser's points in
/// parentheses after a 7-6 set, joined by `", "`.
pub fn serialize_compact_score(sets: &[SetScore]) -> String {
    sets.iter()
        .map(|set| match set.loser_tiebreak_points() {
            Some(points) if set.is_tiebreak() => {
                format!("{}-{}({points})", set.user_games, set.opp_games)
            }
            _ => format!("{}-{}", set.user_games, set.opp_games),
        })
        .join(", ")
}
