//! Elemental type matchup tables and the scoring built on them.
//!
//! # Overview
//!
//! `typerank-chart` is the pure core of the workspace. Everything here is a
//! synchronous function over a [`TypeChart`] and a caller-supplied input:
//!
//! ```text
//! TypeChart (advantage / disadvantage / ineffective)
//!        │
//!        ▼  count_attackers / count_defenders
//! ElementCounts
//!        │
//!        ▼  rank
//! Vec<CountRecord>  x6 (one per Statistic)
//!        │
//!        ▼  score
//! Vec<CombinedRecord>
//! ```
//!
//! `typerank-team` builds the roster analysis on top of the same tables.
//!
//! # Main Types
//!
//! - [`Element`] - The 18 elemental types
//! - [`MatchupMap`] - Element to associated elements for one [`Relation`]
//! - [`TypeChart`] - The three fixed matchup maps
//! - [`ElementCounts`] - Total per-element count lookup
//! - [`CountRecord`], [`CombinedRecord`] - Ranked output records
//! - [`Statistic`] - The six statistics combined by the scorer
//!
//! # Example Usage
//!
//! ```
//! use typerank_chart::{ElementReport, ScoreWeights, TypeChart};
//!
//! let chart = TypeChart::standard();
//! let report = ElementReport::build(&chart, &ScoreWeights::default()).unwrap();
//!
//! let best = &report.combined[0];
//! println!("{} scores {}", best.element, best.score);
//! ```

use thiserror::Error;

pub mod query;
pub mod types;

pub use query::{
    ElementReport, ScoreInputs, ScoreWeights, Statistic, ValidationError, count,
    count_attackers, count_defenders, rank, score, score_or_empty,
};
pub use types::{
    CombinedRecord, CountRecord, Element, ElementCounts, MatchupMap, Perspective, Relation,
    SortOrder, TypeChart,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Unknown element: {0}")]
    InvalidElement(String),

    #[error("Element {0} appears more than once as a matchup key")]
    DuplicateKey(Element),

    #[error("Matchup map has no entry for {0}")]
    IncompleteMap(Element),

    #[error("Unknown sort order: {0}")]
    InvalidSortOrder(String),

    #[error("Unknown statistic: {0}")]
    InvalidStatistic(String),
}
