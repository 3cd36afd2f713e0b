use serde::{Deserialize, Serialize};

use crate::score_engine::parse_optional_int;

/// A validated, finished set.
///
/// Tiebreak points are only meaningful for a 7-6 set and are carried as
/// entered otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub user_games: u8,
    pub opp_games: u8,
    pub user_tiebreak: Option<u32>,
    pub opp_tiebreak: Option<u32>,
}

impl SetScore {
    pub fn new(user_games: u8, opp_games: u8) -> Self {
        Self {
            user_games,
            opp_games,
            user_tiebreak: None,
            opp_tiebreak: None,
        }
    }

    pub fn with_tiebreak(mut self, user_points: u32, opp_points: u32) -> Self {
        self.user_tiebreak = Some(user_points);
        self.opp_tiebreak = Some(opp_points);
        self
    }

    pub fn user_won(&self) -> bool {
        self.user_games > self.opp_games
    }

    /// A 7-6 set in either order.
    pub fn is_tiebreak(&self) -> bool {
        is_tiebreak_pair(u32::from(self.user_games), u32::from(self.opp_games))
    }

    /// Tiebreak points of whichever side lost the set.
    pub fn loser_tiebreak_points(&self) -> Option<u32> {
        if self.user_won() {
            self.opp_tiebreak
        } else {
            self.user_tiebreak
        }
    }
}

/// A set decoded from a stored compact score.
///
/// The compact format only records the tiebreak loser's points; the
/// winner's are reconstructed as the smallest winning count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSetScore {
    pub user_games: u32,
    pub opp_games: u32,
    pub tb_loser_points: Option<u32>,
}

impl ParsedSetScore {
    pub fn user_won(&self) -> bool {
        self.user_games > self.opp_games
    }

    pub fn is_tiebreak(&self) -> bool {
        is_tiebreak_pair(self.user_games, self.opp_games)
    }

    /// `max(7, loser + 2)`. Under-reports a tiebreak won by more than the
    /// minimum: a 12-6 tiebreak comes back as 8-6.
    pub fn winner_tiebreak_points(&self) -> Option<u32> {
        self.tb_loser_points.map(|loser| loser.saturating_add(2).max(7))
    }

    /// Editable form rows for this set. Stored loser points land on the side
    /// with fewer games, the reconstructed winner points on the other.
    pub fn to_fields(&self) -> SetFields {
        let mut fields = SetFields {
            user_games: self.user_games.to_string(),
            opp_games: self.opp_games.to_string(),
            ..SetFields::default()
        };
        let tiebreak = self.tb_loser_points.zip(self.winner_tiebreak_points());
        if let Some((loser, winner)) = tiebreak {
            let (user_points, opp_points) = if self.user_games < self.opp_games {
                (loser, winner)
            } else {
                (winner, loser)
            };
            fields.user_tiebreak = user_points.to_string();
            fields.opp_tiebreak = opp_points.to_string();
        }
        fields
    }
}

/// One set row as typed into the match form, before any parsing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetFields {
    pub user_games: String,
    pub opp_games: String,
    pub user_tiebreak: String,
    pub opp_tiebreak: String,
}

impl SetFields {
    pub fn new(user_games: &str, opp_games: &str) -> Self {
        Self {
            user_games: user_games.to_string(),
            opp_games: opp_games.to_string(),
            ..Self::default()
        }
    }

    pub fn with_tiebreak(mut self, user_points: &str, opp_points: &str) -> Self {
        self.user_tiebreak = user_points.to_string();
        self.opp_tiebreak = opp_points.to_string();
        self
    }

    /// Parse every field to integer-or-blank.
    pub fn parse(&self) -> SetEntry {
        SetEntry {
            user_games: parse_optional_int(&self.user_games),
            opp_games: parse_optional_int(&self.opp_games),
            user_tiebreak: parse_optional_int(&self.user_tiebreak),
            opp_tiebreak: parse_optional_int(&self.opp_tiebreak),
        }
    }
}

/// A set row after field parsing; `None` means the field was left blank.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEntry {
    pub user_games: Option<i64>,
    pub opp_games: Option<i64>,
    pub user_tiebreak: Option<i64>,
    pub opp_tiebreak: Option<i64>,
}

impl SetEntry {
    pub fn games(user_games: i64, opp_games: i64) -> Self {
        Self {
            user_games: Some(user_games),
            opp_games: Some(opp_games),
            ..Self::default()
        }
    }

    pub fn with_tiebreak(mut self, user_points: i64, opp_points: i64) -> Self {
        self.user_tiebreak = Some(user_points);
        self.opp_tiebreak = Some(opp_points);
        self
    }

    /// Both game fields blank.
    pub fn is_empty(&self) -> bool {
        self.user_games.is_none() && self.opp_games.is_none()
    }
}

impl From<SetScore> for SetEntry {
    fn from(set: SetScore) -> Self {
        Self {
            user_games: Some(i64::from(set.user_games)),
            opp_games: Some(i64::from(set.opp_games)),
            user_tiebreak: set.user_tiebreak.map(i64::from),
            opp_tiebreak: set.opp_tiebreak.map(i64::from),
        }
    }
}

fn is_tiebreak_pair(a: u32, b: u32) -> bool {
    a.max(b) == 7 && a.min(b) == 6
}
