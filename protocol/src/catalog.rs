//! Numeric ids the marketplace uses for heroes, rarities, auras and body parts

use serde::Serialize;

/// Heroes with a known base card id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hero {
    Legolas,
    Scary,
    Ties,
    Kuroo,
}

impl Hero {
    pub const ALL: [Hero; 4] = [Hero::Legolas, Hero::Scary, Hero::Ties, Hero::Kuroo];

    pub fn base_card_id(&self) -> u32 {
        match self {
            Hero::Legolas => 11,
            Hero::Scary => 19,
            Hero::Ties => 21,
            Hero::Kuroo => 22,
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "legolas" => Some(Hero::Legolas),
            "scary" => Some(Hero::Scary),
            "ties" => Some(Hero::Ties),
            "kuroo" => Some(Hero::Kuroo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hero::Legolas => "legolas",
            Hero::Scary => "scary",
            Hero::Ties => "ties",
            Hero::Kuroo => "kuroo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rarity {
    A,
    S,
}

impl Rarity {
    pub fn id(&self) -> u8 {
        match self {
            Rarity::A => 2,
            Rarity::S => 3,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            2 => Some(Rarity::A),
            3 => Some(Rarity::S),
            _ => None,
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim() {
            "A" | "a" => Some(Rarity::A),
            "S" | "s" => Some(Rarity::S),
            _ => None,
        }
    }
}

/// Aura colour, sent as `quality` on market items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aura {
    Gray,
    Purple,
    Orange,
    Red,
}

impl Aura {
    pub fn from_quality(quality: u8) -> Option<Self> {
        match quality {
            3 => Some(Aura::Gray),
            4 => Some(Aura::Purple),
            5 => Some(Aura::Orange),
            6 => Some(Aura::Red),
            _ => None,
        }
    }
}

/// Body part quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BodyPartTier {
    #[serde(rename = "rare")]
    Rare,
    #[serde(rename = "epic 1")]
    Epic1,
    #[serde(rename = "epic 2")]
    Epic2,
    #[serde(rename = "legend 1")]
    Legend1,
    #[serde(rename = "legend 2")]
    Legend2,
}

impl BodyPartTier {
    pub fn from_quality(quality: u8) -> Option<Self> {
        match quality {
            4 => Some(BodyPartTier::Rare),
            5 => Some(BodyPartTier::Epic1),
            6 => Some(BodyPartTier::Epic2),
            7 => Some(BodyPartTier::Legend1),
            8 => Some(BodyPartTier::Legend2),
            _ => None,
        }
    }
}
