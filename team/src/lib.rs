//! Team composition analysis.
//!
//! A [`Roster`] is an ordered list of elements, duplicates allowed. The
//! [`analyze_team`] aggregator sums every member's attack and defense
//! contributions into four partial tallies keyed only by the elements the
//! roster actually touches.
//!
//! ```
//! use typerank_chart::{Element, TypeChart};
//! use typerank_team::{Roster, analyze_team};
//!
//! let chart = TypeChart::standard();
//! let roster: Roster = "fire, fire".parse().unwrap();
//! let analysis = analyze_team(&chart, roster.members());
//!
//! assert_eq!(analysis.attack_strong_against.get(&Element::Grass), Some(&2));
//! ```

use thiserror::Error;
use typerank_chart::ChartError;

mod analysis;
mod roster;

pub use analysis::{ElementTally, TeamAnalysis, TeamTotals, analyze_team};
pub use roster::Roster;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),
}
