//! The fixed type chart

use crate::types::{Element, MatchupMap, Relation};

use Element::*;

/// The three matchup maps every core operation reads from
///
/// Built once (usually via [`TypeChart::standard`]) and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChart {
    advantage: MatchupMap,
    disadvantage: MatchupMap,
    ineffective: MatchupMap,
}

impl TypeChart {
    pub fn new(advantage: MatchupMap, disadvantage: MatchupMap, ineffective: MatchupMap) -> Self {
        Self {
            advantage,
            disadvantage,
            ineffective,
        }
    }

    /// The standard chart
    pub fn standard() -> Self {
        Self {
            advantage: MatchupMap::from_table(&ADVANTAGE),
            disadvantage: MatchupMap::from_table(&DISADVANTAGE),
            ineffective: MatchupMap::from_table(&INEFFECTIVE),
        }
    }

    pub fn map(&self, relation: Relation) -> &MatchupMap {
        match relation {
            Relation::Advantage => &self.advantage,
            Relation::Disadvantage => &self.disadvantage,
            Relation::Ineffective => &self.ineffective,
        }
    }

    pub fn advantage(&self) -> &MatchupMap {
        &self.advantage
    }

    pub fn disadvantage(&self) -> &MatchupMap {
        &self.disadvantage
    }

    pub fn ineffective(&self) -> &MatchupMap {
        &self.ineffective
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}

// Rows follow the canonical element order: Normal, Fire, Water, Electric,
// Grass, Ice, Fighting, Poison, Ground, Flying, Psychic, Bug, Rock, Ghost,
// Dragon, Dark, Steel, Fairy.

/// Elements each attacker hits effectively.
/// A defender listed in few rows defends well; a long row attacks well.
#[rustfmt::skip]
static ADVANTAGE: [&[Element]; Element::COUNT] = [
    /* normal   */ &[],
    /* fire     */ &[Grass, Ice, Bug, Steel],
    /* water    */ &[Fire, Ground, Rock],
    /* electric */ &[Water, Flying],
    /* grass    */ &[Water, Ground, Rock],
    /* ice      */ &[Grass, Ground, Flying, Dragon],
    /* fighting */ &[Normal, Ice, Rock, Dark, Steel],
    /* poison   */ &[Grass, Psychic],
    /* ground   */ &[Fire, Electric, Poison, Rock, Steel],
    /* flying   */ &[Grass, Fighting, Bug],
    /* psychic  */ &[Fighting, Poison],
    /* bug      */ &[Grass, Psychic, Dark],
    /* rock     */ &[Fire, Ice, Flying, Bug],
    /* ghost    */ &[Psychic, Ghost],
    /* dragon   */ &[Dragon],
    /* dark     */ &[Psychic, Ghost],
    /* steel    */ &[Ice, Rock, Fairy],
    /* fairy    */ &[Fighting, Dragon, Dark],
];

/// Elements that resist each attacker.
/// A defender listed in many rows defends well; a long row attacks poorly.
#[rustfmt::skip]
static DISADVANTAGE: [&[Element]; Element::COUNT] = [
    /* normal   */ &[Rock, Steel],
    /* fire     */ &[Fire, Water, Rock, Dragon],
    /* water    */ &[Water, Grass, Dragon],
    /* electric */ &[Electric, Grass, Dragon],
    /* grass    */ &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
    /* ice      */ &[Fire, Water, Ice, Steel],
    /* fighting */ &[Poison, Flying, Psychic, Bug, Fairy],
    /* poison   */ &[Poison, Ground, Rock, Ghost],
    /* ground   */ &[Grass, Bug],
    /* flying   */ &[Electric, Rock, Steel],
    /* psychic  */ &[Psychic, Steel],
    /* bug      */ &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
    /* rock     */ &[Poison, Ground, Steel],
    /* ghost    */ &[Dark],
    /* dragon   */ &[Steel],
    /* dark     */ &[Fighting, Dark, Fairy],
    /* steel    */ &[Fire, Water, Electric],
    /* fairy    */ &[Fire, Ghost, Steel],
];

/// Elements immune to each attacker.
#[rustfmt::skip]
static INEFFECTIVE: [&[Element]; Element::COUNT] = [
    /* normal   */ &[Ghost],
    /* fire     */ &[],
    /* water    */ &[],
    /* electric */ &[Ground],
    /* grass    */ &[],
    /* ice      */ &[],
    /* fighting */ &[Ghost],
    /* poison   */ &[Steel],
    /* ground   */ &[Flying],
    /* flying   */ &[],
    /* psychic  */ &[Dark],
    /* bug      */ &[],
    /* rock     */ &[],
    /* ghost    */ &[Normal],
    /* dragon   */ &[Fairy],
    /* dark     */ &[],
    /* steel    */ &[],
    /* fairy    */ &[],
];
