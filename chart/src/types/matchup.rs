//! Matchup maps: element to its associated elements for one relation

use crate::ChartError;
use crate::types::Element;

/// Which matchup table a map represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Relation {
    /// Key attacks the listed elements effectively
    Advantage,
    /// Key's attacks are resisted by the listed elements
    Disadvantage,
    /// Key's attacks do nothing to the listed elements
    Ineffective,
}

impl Relation {
    pub const ALL: [Relation; 3] = [
        Relation::Advantage,
        Relation::Disadvantage,
        Relation::Ineffective,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Advantage => "advantage",
            Relation::Disadvantage => "disadvantage",
            Relation::Ineffective => "ineffective",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Side of a matchup a count is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Perspective {
    /// Length of the element's own list
    Attacker,
    /// Number of lists the element appears in
    Defender,
}

/// Mapping from every element to an ordered list of elements
///
/// Every element is a key exactly once. Lists need not be disjoint or
/// complete, and may contain the key itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupMap {
    entries: [Vec<Element>; Element::COUNT],
}

impl MatchupMap {
    /// Build from (key, list) pairs, rejecting duplicate or missing keys
    pub fn from_entries<I>(entries: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (Element, Vec<Element>)>,
    {
        let mut slots: [Option<Vec<Element>>; Element::COUNT] = std::array::from_fn(|_| None);

        for (key, list) in entries {
            let slot = &mut slots[key.index()];
            if slot.is_some() {
                return Err(ChartError::DuplicateKey(key));
            }
            *slot = Some(list);
        }

        if let Some(missing) = Element::ALL.iter().find(|e| slots[e.index()].is_none()) {
            return Err(ChartError::IncompleteMap(*missing));
        }

        Ok(Self {
            entries: slots.map(Option::unwrap_or_default),
        })
    }

    /// Build from a table whose rows follow the canonical element order
    pub(crate) fn from_table(table: &[&[Element]; Element::COUNT]) -> Self {
        Self {
            entries: std::array::from_fn(|i| table[i].to_vec()),
        }
    }

    /// Elements associated with `key`
    pub fn get(&self, key: Element) -> &[Element] {
        &self.entries[key.index()]
    }

    /// Whether `target` is in `key`'s list
    pub fn contains(&self, key: Element, target: Element) -> bool {
        self.get(key).contains(&target)
    }

    /// Iterate (key, list) in canonical key order
    pub fn iter(&self) -> impl Iterator<Item = (Element, &[Element])> + '_ {
        Element::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    /// Total number of (key, listed element) pairs
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }
}
