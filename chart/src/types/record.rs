//! Count and score records

use std::ops::Index;
use std::str::FromStr;

use crate::ChartError;
use crate::types::Element;

/// Ranking direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" => Ok(SortOrder::Descending),
            _ => Err(ChartError::InvalidSortOrder(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One element's count within a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRecord {
    pub element: Element,
    pub count: u32,
}

/// Count for every element
///
/// Total over the closed element set: an element nobody touched reads as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementCounts {
    counts: [u32; Element::COUNT],
}

impl ElementCounts {
    /// All counts at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute each element's count with `f`
    pub fn from_fn(mut f: impl FnMut(Element) -> u32) -> Self {
        Self {
            counts: Element::ALL.map(&mut f),
        }
    }

    /// Direct lookup from a ranking, discarding its order
    ///
    /// Elements missing from `records` stay at 0. If an element is listed
    /// twice the later record wins.
    pub fn from_records(records: &[CountRecord]) -> Self {
        let mut counts = Self::new();
        for record in records {
            counts.set(record.element, record.count);
        }
        counts
    }

    pub fn get(&self, element: Element) -> u32 {
        self.counts[element.index()]
    }

    pub fn set(&mut self, element: Element, count: u32) {
        self.counts[element.index()] = count;
    }

    pub fn increment(&mut self, element: Element) {
        self.counts[element.index()] += 1;
    }

    /// Iterate (element, count) in canonical element order
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::ALL.iter().map(move |e| (*e, self.get(*e)))
    }

    /// Sum of all counts
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl Index<Element> for ElementCounts {
    type Output = u32;

    fn index(&self, element: Element) -> &u32 {
        &self.counts[element.index()]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ElementCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// All six statistics and both scores for one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombinedRecord {
    pub element: Element,
    pub attack_strength: u32,
    pub attack_weakness: u32,
    pub defense_strength: u32,
    pub defense_weakness: u32,
    pub super_defense_strength: u32,
    pub super_attack_weakness: u32,
    /// Score from the four plain statistics only (the tie-break key)
    pub base_score: i64,
    /// Base score plus the weighted super statistics
    pub score: i64,
}
