mod format;
mod outcome;
mod record;
mod set_score;

pub use format::*;
pub use outcome::*;
pub use record::*;
pub use set_score::*;
