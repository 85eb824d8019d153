//! Counting, ranking and scoring over a type chart
//!
//! Every function here is pure: the same chart and input always give the
//! same output, including the order of tied records.

mod count;
mod rank;
mod report;
mod score;

pub use count::{count, count_attackers, count_defenders};
pub use rank::{Statistic, rank};
pub use report::ElementReport;
pub use score::{ScoreInputs, ScoreWeights, ValidationError, score, score_or_empty};
