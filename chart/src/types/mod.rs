//! Domain types for the type chart

mod chart;
mod element;
mod matchup;
mod record;

pub use chart::TypeChart;
pub use element::Element;
pub use matchup::{MatchupMap, Perspective, Relation};
pub use record::{CombinedRecord, CountRecord, ElementCounts, SortOrder};
