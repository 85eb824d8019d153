//! Per-element counts from a matchup map

use crate::types::{ElementCounts, MatchupMap, Perspective};

/// Count, for each element, how many lists it appears in
pub fn count_defenders(map: &MatchupMap) -> ElementCounts {
    let mut counts = ElementCounts::new();
    for (_, listed) in map.iter() {
        for element in listed {
            counts.increment(*element);
        }
    }
    counts
}

/// Count, for each element, the length of its own list
pub fn count_attackers(map: &MatchupMap) -> ElementCounts {
    ElementCounts::from_fn(|element| map.get(element).len() as u32)
}

/// Count from the given perspective
pub fn count(map: &MatchupMap, perspective: Perspective) -> ElementCounts {
    match perspective {
        Perspective::Attacker => count_attackers(map),
        Perspective::Defender => count_defenders(map),
    }
}
