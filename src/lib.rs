//! Tennis match score entry: decoding and encoding the compact score string
//! a match is stored with, and validating set-by-set input from the match
//! form before it is saved.

pub use error::{Result, ScoreError};
pub use form::MatchForm;
pub use model::*;
pub use score_engine::{
    parse_compact_score, parse_optional_int, parse_result_field, serialize_compact_score,
    should_show_tiebreak_fields, validate_match, validate_set,
};

mod error;
mod form;
mod model;
pub mod score_engine;
