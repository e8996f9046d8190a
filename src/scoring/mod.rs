//! Scoring: the per-player ledger and the award/penalty arithmetic.
//!
//! - Correct answer: `effectiveValue`, plus a speed bonus of 20% while at
//!   least 30 seconds remain, times 1.5 once the streak reaches 3.
//! - Wrong answer or timeout: minus half the effective value.
//! - Voluntary pass: free, except the picker on a forced cell (who may not
//!   pass at all).

mod book;
mod rules;

pub use book::{PlayerRecord, ScoreBook, Standing};
pub use rules::{AttemptKind, Award, ScoringRules};
