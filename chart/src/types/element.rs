//! The closed set of elemental types

use std::str::FromStr;

use crate::ChartError;

/// Elemental types (18, fixed)
///
/// Declaration order is the canonical iteration order used by every table
/// and every ranking tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Element {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Element {
    /// Number of elements
    pub const COUNT: usize = 18;

    /// All 18 elements in canonical order
    pub const ALL: [Element; Element::COUNT] = [
        Element::Normal,
        Element::Fire,
        Element::Water,
        Element::Electric,
        Element::Grass,
        Element::Ice,
        Element::Fighting,
        Element::Poison,
        Element::Ground,
        Element::Flying,
        Element::Psychic,
        Element::Bug,
        Element::Rock,
        Element::Ghost,
        Element::Dragon,
        Element::Dark,
        Element::Steel,
        Element::Fairy,
    ];

    /// Get all elements as a slice
    pub fn all() -> &'static [Element] {
        &Self::ALL
    }

    /// Position in the canonical order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse from a name (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Element::Normal),
            "fire" => Some(Element::Fire),
            "water" => Some(Element::Water),
            "electric" => Some(Element::Electric),
            "grass" => Some(Element::Grass),
            "ice" => Some(Element::Ice),
            "fighting" => Some(Element::Fighting),
            "poison" => Some(Element::Poison),
            "ground" => Some(Element::Ground),
            "flying" => Some(Element::Flying),
            "psychic" => Some(Element::Psychic),
            "bug" => Some(Element::Bug),
            "rock" => Some(Element::Rock),
            "ghost" => Some(Element::Ghost),
            "dragon" => Some(Element::Dragon),
            "dark" => Some(Element::Dark),
            "steel" => Some(Element::Steel),
            "fairy" => Some(Element::Fairy),
            _ => None,
        }
    }

    /// Lowercase name, as used in tables and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Normal => "normal",
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Electric => "electric",
            Element::Grass => "grass",
            Element::Ice => "ice",
            Element::Fighting => "fighting",
            Element::Poison => "poison",
            Element::Ground => "ground",
            Element::Flying => "flying",
            Element::Psychic => "psychic",
            Element::Bug => "bug",
            Element::Rock => "rock",
            Element::Ghost => "ghost",
            Element::Dragon => "dragon",
            Element::Dark => "dark",
            Element::Steel => "steel",
            Element::Fairy => "fairy",
        }
    }
}

impl FromStr for Element {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::from_name(s).ok_or_else(|| ChartError::InvalidElement(s.to_string()))
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
