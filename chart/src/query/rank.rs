//! Ranking per-element counts, and the six statistics the scorer combines

use std::str::FromStr;

use crate::ChartError;
use crate::query::count;
use crate::types::{CountRecord, ElementCounts, Perspective, Relation, SortOrder, TypeChart};

/// Rank every element by count
///
/// The sort is stable over the canonical element order, so tied elements
/// always come out in enumeration order.
pub fn rank(counts: &ElementCounts, order: SortOrder) -> Vec<CountRecord> {
    let mut records: Vec<CountRecord> = counts
        .iter()
        .map(|(element, count)| CountRecord { element, count })
        .collect();

    match order {
        SortOrder::Ascending => records.sort_by(|a, b| a.count.cmp(&b.count)),
        SortOrder::Descending => records.sort_by(|a, b| b.count.cmp(&a.count)),
    }

    records
}

/// One of the six per-element statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Statistic {
    MostAttackStrength,
    LeastAttackWeakness,
    MostDefenseStrength,
    LeastDefenseWeakness,
    MostSuperDefenseStrength,
    LeastSuperAttackWeakness,
}

impl Statistic {
    pub const ALL: [Statistic; 6] = [
        Statistic::MostAttackStrength,
        Statistic::LeastAttackWeakness,
        Statistic::MostDefenseStrength,
        Statistic::LeastDefenseWeakness,
        Statistic::MostSuperDefenseStrength,
        Statistic::LeastSuperAttackWeakness,
    ];

    /// Table the statistic is counted from
    pub fn relation(&self) -> Relation {
        match self {
            Statistic::MostAttackStrength | Statistic::LeastDefenseWeakness => Relation::Advantage,
            Statistic::LeastAttackWeakness | Statistic::MostDefenseStrength => {
                Relation::Disadvantage
            }
            Statistic::MostSuperDefenseStrength | Statistic::LeastSuperAttackWeakness => {
                Relation::Ineffective
            }
        }
    }

    pub fn perspective(&self) -> Perspective {
        match self {
            Statistic::MostAttackStrength
            | Statistic::LeastAttackWeakness
            | Statistic::LeastSuperAttackWeakness => Perspective::Attacker,
            Statistic::MostDefenseStrength
            | Statistic::LeastDefenseWeakness
            | Statistic::MostSuperDefenseStrength => Perspective::Defender,
        }
    }

    /// "Most" statistics rank descending, "least" ascending
    pub fn order(&self) -> SortOrder {
        match self {
            Statistic::MostAttackStrength
            | Statistic::MostDefenseStrength
            | Statistic::MostSuperDefenseStrength => SortOrder::Descending,
            Statistic::LeastAttackWeakness
            | Statistic::LeastDefenseWeakness
            | Statistic::LeastSuperAttackWeakness => SortOrder::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::MostAttackStrength => "most-attack-strength",
            Statistic::LeastAttackWeakness => "least-attack-weakness",
            Statistic::MostDefenseStrength => "most-defense-strength",
            Statistic::LeastDefenseWeakness => "least-defense-weakness",
            Statistic::MostSuperDefenseStrength => "most-super-defense-strength",
            Statistic::LeastSuperAttackWeakness => "least-super-attack-weakness",
        }
    }

    /// Heading used in reports
    pub fn title(&self) -> &'static str {
        match self {
            Statistic::MostAttackStrength => "Elements with most attack strength",
            Statistic::LeastAttackWeakness => "Elements with least attack weakness",
            Statistic::MostDefenseStrength => "Elements with most defense strength",
            Statistic::LeastDefenseWeakness => "Elements with least defense weakness",
            Statistic::MostSuperDefenseStrength => "Elements with most super defense strength",
            Statistic::LeastSuperAttackWeakness => "Elements with least super attack weakness",
        }
    }
}

impl FromStr for Statistic {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Statistic::ALL
            .iter()
            .copied()
            .find(|stat| stat.as_str() == normalized)
            .ok_or_else(|| ChartError::InvalidStatistic(s.to_string()))
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TypeChart {
    /// Unranked counts behind a statistic
    pub fn counts(&self, statistic: Statistic) -> ElementCounts {
        count(self.map(statistic.relation()), statistic.perspective())
    }

    /// Ranking for a statistic, in the statistic's own order
    pub fn ranking(&self, statistic: Statistic) -> Vec<CountRecord> {
        rank(&self.counts(statistic), statistic.order())
    }
}
