use crate::error::{Result, ScoreError};
use crate::model::{MatchFormat, MatchOutcome, MatchResult, SetEntry, SetScore};

const MAX_GAMES: i64 = 7;
const TIEBREAK_TARGET: i64 = 7;
const TIEBREAK_MARGIN: i64 = 2;

/// Check one finished set against standard six-game set rules with a
/// tiebreak at 6-6. `index` is 0-based; errors report the 1-based set number.
///
/// Tiebreak points are only looked at for a 7-6 set.
pub fn validate_set(
    index: usize,
    user_games: i64,
    opp_games: i64,
    user_tiebreak: Option<i64>,
    opp_tiebreak: Option<i64>,
) -> Result<()> {
    let set = index + 1;
    if !(0..=MAX_GAMES).contains(&user_games) || !(0..=MAX_GAMES).contains(&opp_games) {
        return Err(ScoreError::GamesOutOfRange { set });
    }
    if user_games == opp_games {
        return Err(ScoreError::TiedSet { set });
    }

    let high = user_games.max(opp_games);
    let low = user_games.min(opp_games);
    match (high, low) {
        (6, 0..=4) | (7, 5) => Ok(()),
        (7, 6) => {
            let (Some(user_points), Some(opp_points)) = (user_tiebreak, opp_tiebreak) else {
                return Err(ScoreError::TiebreakRequired { set });
            };
            if user_points < 0 || opp_points < 0 {
                return Err(ScoreError::InvalidTiebreakPoints { set });
            }
            let (winner, loser) = if user_games > opp_games {
                (user_points, opp_points)
            } else {
                (opp_points, user_points)
            };
            if winner < TIEBREAK_TARGET {
                return Err(ScoreError::TiebreakWinnerTooLow { set });
            }
            if winner - loser < TIEBREAK_MARGIN {
                return Err(ScoreError::TiebreakMarginTooSmall { set });
            }
            Ok(())
        }
        _ => Err(ScoreError::InvalidSetScore {
            set,
            user_games,
            opp_games,
        }),
    }
}

/// Validate a whole match and derive who won it.
///
/// Sets must be filled from the first without gaps, the match must be
/// decided within the format, and nothing may follow the deciding set.
/// `claimed` is the optional result picked on the form; it must agree with
/// the sets.
pub fn validate_match(
    sets: &[SetEntry],
    format: MatchFormat,
    claimed: Option<MatchResult>,
) -> Result<MatchOutcome> {
    let max_sets = format.max_sets();
    let mut played = Vec::with_capacity(max_sets);
    let mut seen_empty = false;
    let mut first_overflow = None;

    for (index, entry) in sets.iter().enumerate() {
        if entry.is_empty() {
            seen_empty = true;
            continue;
        }
        if seen_empty {
            return Err(ScoreError::SetGap { set: index + 1 });
        }
        if index >= max_sets {
            first_overflow.get_or_insert(index);
            continue;
        }
        let (Some(user_games), Some(opp_games)) = (entry.user_games, entry.opp_games) else {
            return Err(ScoreError::IncompleteSet { set: index + 1 });
        };
        validate_set(
            index,
            user_games,
            opp_games,
            entry.user_tiebreak,
            entry.opp_tiebreak,
        )?;
        played.push(to_set_score(index, entry)?);
    }

    if played.is_empty() {
        return Err(ScoreError::NoSets);
    }

    let sets_to_win = format.sets_to_win();
    let (user_sets, opp_sets) = set_counts(&played);
    if user_sets < sets_to_win && opp_sets < sets_to_win {
        return Err(ScoreError::MatchUndecided {
            sets_to_win,
            format,
        });
    }

    let (deciding, result) = deciding_set(&played, sets_to_win);
    if deciding + 1 < played.len() {
        return Err(ScoreError::ExtraSets { set: deciding + 2 });
    }
    if let Some(index) = first_overflow {
        return Err(ScoreError::ExtraSets { set: index + 1 });
    }

    if let Some(claimed) = claimed {
        if claimed != result {
            return Err(ScoreError::ResultMismatch { expected: result });
        }
    }

    Ok(MatchOutcome {
        result,
        user_sets,
        opp_sets,
        sets: played,
    })
}

/// Index of the set where one side first reached `sets_to_win`, and who
/// that was. Callers make sure someone gets there.
fn deciding_set(played: &[SetScore], sets_to_win: u8) -> (usize, MatchResult) {
    let mut user_sets = 0;
    let mut opp_sets = 0;
    for (index, set) in played.iter().enumerate() {
        if set.user_won() {
            user_sets += 1;
        } else {
            opp_sets += 1;
        }
        if user_sets == sets_to_win {
            return (index, MatchResult::Win);
        }
        if opp_sets == sets_to_win {
            return (index, MatchResult::Loss);
        }
    }
    let last = played.len().saturating_sub(1);
    if user_sets > opp_sets {
        (last, MatchResult::Win)
    } else {
        (last, MatchResult::Loss)
    }
}

fn set_counts(played: &[SetScore]) -> (u8, u8) {
    played.iter().fold((0, 0), |(user, opp), set| {
        if set.user_won() {
            (user + 1, opp)
        } else {
            (user, opp + 1)
        }
    })
}

/// Narrow an already validated entry. Tiebreak points are dropped unless the
/// set went to a tiebreak.
fn to_set_score(index: usize, entry: &SetEntry) -> Result<SetScore> {
    let set = index + 1;
    let games = |value: Option<i64>| {
        value
            .and_then(|games| u8::try_from(games).ok())
            .ok_or(ScoreError::GamesOutOfRange { set })
    };
    let mut score = SetScore::new(games(entry.user_games)?, games(entry.opp_games)?);
    if score.is_tiebreak() {
        let points = |value: Option<i64>| {
            value
                .and_then(|points| u32::try_from(points).ok())
                .ok_or(ScoreError::InvalidTiebreakPoints { set })
        };
        score = score.with_tiebreak(points(entry.user_tiebreak)?, points(entry.opp_tiebreak)?);
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score_engine::parse_compact_score;

    fn entries(score: &str) -> Vec<SetEntry> {
        parse_compact_score(score)
            .iter()
            .map(|set| set.to_fields().parse())
            .collect()
    }

    #[test]
    fn test_tied_sets_rejected() {
        for games in 0..=7 {
            assert_eq!(
                validate_set(0, games, games, None, None),
                Err(ScoreError::TiedSet { set: 1 })
            );
        }
    }

    #[test]
    fn test_regular_sets_accepted() {
        let legal = [(6, 0), (6, 1), (6, 2), (6, 3), (6, 4), (7, 5)];
        for (a, b) in legal {
            assert!(validate_set(0, a, b, None, None).is_ok());
            assert!(validate_set(0, b, a, None, None).is_ok());
        }
    }

    #[test]
    fn test_regular_set_ignores_stray_tiebreak() {
        assert!(validate_set(0, 6, 3, Some(-4), Some(99)).is_ok());
    }

    #[test]
    fn test_games_out_of_range() {
        assert_eq!(
            validate_set(2, 8, 6, None, None),
            Err(ScoreError::GamesOutOfRange { set: 3 })
        );
        assert_eq!(
            validate_set(0, -1, 6, None, None),
            Err(ScoreError::GamesOutOfRange { set: 1 })
        );
    }

    #[test]
    fn test_unfinished_sets_rejected() {
        for (a, b) in [(5, 3), (6, 5), (7, 4), (7, 0), (0, 1)] {
            assert_eq!(
                validate_set(1, a, b, None, None),
                Err(ScoreError::InvalidSetScore {
                    set: 2,
                    user_games: a,
                    opp_games: b
                })
            );
        }
    }

    #[test]
    fn test_tiebreak_rules() {
        assert_eq!(
            validate_set(0, 7, 6, None, Some(3)),
            Err(ScoreError::TiebreakRequired { set: 1 })
        );
        assert_eq!(
            validate_set(0, 7, 6, Some(7), Some(-1)),
            Err(ScoreError::InvalidTiebreakPoints { set: 1 })
        );
        for winner in 0..=15 {
            for loser in 0..=15 {
                let expected_ok = winner >= 7 && winner - loser >= 2;
                assert_eq!(
                    validate_set(0, 7, 6, Some(winner), Some(loser)).is_ok(),
                    expected_ok,
                    "user won tiebreak {winner}-{loser}"
                );
                assert_eq!(
                    validate_set(0, 6, 7, Some(loser), Some(winner)).is_ok(),
                    expected_ok,
                    "opponent won tiebreak {winner}-{loser}"
                );
            }
        }
        assert_eq!(
            validate_set(0, 6, 7, Some(3), Some(6)),
            Err(ScoreError::TiebreakWinnerTooLow { set: 1 })
        );
        assert_eq!(
            validate_set(0, 7, 6, Some(8), Some(7)),
            Err(ScoreError::TiebreakMarginTooSmall { set: 1 })
        );
    }

    #[test]
    fn test_match_win_two_sets_to_one() {
        let outcome =
            validate_match(&entries("6-4, 3-6, 6-2"), MatchFormat::BestOf3, None).unwrap();
        assert_eq!(outcome.result, MatchResult::Win);
        assert_eq!((outcome.user_sets, outcome.opp_sets), (2, 1));
        assert_eq!(outcome.sets.len(), 3);
    }

    #[test]
    fn test_match_loss_best_of_five() {
        let outcome =
            validate_match(&entries("3-6, 7-6(5), 4-6, 2-6"), MatchFormat::BestOf5, None).unwrap();
        assert_eq!(outcome.result, MatchResult::Loss);
        assert_eq!((outcome.user_sets, outcome.opp_sets), (1, 3));
        assert_eq!(outcome.sets[1], SetScore::new(7, 6).with_tiebreak(7, 5));
    }

    #[test]
    fn test_claimed_result_must_match() {
        assert_eq!(
            validate_match(
                &entries("6-4, 6-3, 6-3"),
                MatchFormat::BestOf5,
                Some(MatchResult::Loss)
            ),
            Err(ScoreError::ResultMismatch {
                expected: MatchResult::Win
            })
        );
        assert!(validate_match(
            &entries("6-4, 6-3, 6-3"),
            MatchFormat::BestOf5,
            Some(MatchResult::Win)
        )
        .is_ok());
    }

    #[test]
    fn test_extra_sets_after_decided() {
        assert_eq!(
            validate_match(&entries("6-0, 6-0, 6-0, 6-0"), MatchFormat::BestOf3, None),
            Err(ScoreError::ExtraSets { set: 3 })
        );
        assert_eq!(
            validate_match(&entries("6-0, 0-6, 6-0, 6-0"), MatchFormat::BestOf3, None),
            Err(ScoreError::ExtraSets { set: 4 })
        );
        assert_eq!(
            validate_match(&entries("6-1, 6-1, 6-1, 1-6"), MatchFormat::BestOf5, None),
            Err(ScoreError::ExtraSets { set: 4 })
        );
    }

    #[test]
    fn test_gap_between_sets() {
        let sets = [
            SetEntry::games(6, 4),
            SetEntry::default(),
            SetEntry::games(6, 2),
        ];
        assert_eq!(
            validate_match(&sets, MatchFormat::BestOf3, None),
            Err(ScoreError::SetGap { set: 3 })
        );
    }

    #[test]
    fn test_incomplete_set() {
        let sets = [
            SetEntry::games(6, 4),
            SetEntry {
                user_games: Some(6),
                ..SetEntry::default()
            },
        ];
        assert_eq!(
            validate_match(&sets, MatchFormat::BestOf3, None),
            Err(ScoreError::IncompleteSet { set: 2 })
        );
    }

    #[test]
    fn test_no_sets() {
        assert_eq!(
            validate_match(&[SetEntry::default(); 3], MatchFormat::BestOf3, None),
            Err(ScoreError::NoSets)
        );
        assert_eq!(
            validate_match(&[], MatchFormat::BestOf5, None),
            Err(ScoreError::NoSets)
        );
    }

    #[test]
    fn test_undecided_match() {
        let err = validate_match(&entries("6-4, 3-6"), MatchFormat::BestOf3, None).unwrap_err();
        assert_eq!(
            err,
            ScoreError::MatchUndecided {
                sets_to_win: 2,
                format: MatchFormat::BestOf3
            }
        );
        assert_eq!(
            err.to_string(),
            "match must end when someone wins 2 sets for best of 3."
        );
        assert!(validate_match(&entries("6-4, 6-3"), MatchFormat::BestOf5, None).is_err());
    }

    #[test]
    fn test_first_set_error_wins() {
        let sets = [SetEntry::games(6, 6), SetEntry::games(9, 2)];
        assert_eq!(
            validate_match(&sets, MatchFormat::BestOf3, None),
            Err(ScoreError::TiedSet { set: 1 })
        );
    }

    #[test]
    fn test_tiebreak_scenario() {
        let sets = [
            SetEntry::games(6, 4),
            SetEntry::games(3, 6),
            SetEntry::games(7, 6).with_tiebreak(7, 4),
        ];
        let outcome = validate_match(&sets, MatchFormat::BestOf3, None).unwrap();
        assert_eq!(outcome.result, MatchResult::Win);
        assert_eq!(outcome.user_sets, 2);
        assert_eq!(
            crate::score_engine::serialize_compact_score(&outcome.sets),
            "6-4, 3-6, 7-6(4)"
        );
    }

    #[test]
    fn test_stray_tiebreak_dropped_from_regular_set() {
        let sets = [
            SetEntry::games(6, 4).with_tiebreak(-3, 2),
            SetEntry::games(6, 4),
        ];
        let outcome = validate_match(&sets, MatchFormat::BestOf3, None).unwrap();
        assert_eq!(outcome.sets[0], SetScore::new(6, 4));
    }
}
