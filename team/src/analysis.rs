//! Team aggregator

use std::collections::BTreeMap;

use serde::Serialize;
use typerank_chart::{Element, ElementCounts, Statistic, TypeChart};

/// Partial per-element tally; an absent key means the roster never touched it
pub type ElementTally = BTreeMap<Element, u32>;

/// Summed attack and defense contributions of a roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamAnalysis {
    /// Defender -> number of members that attack it effectively
    pub attack_strong_against: ElementTally,
    /// Defender -> number of members whose attacks it resists
    pub attack_weak_against: ElementTally,
    /// Member element -> resistances, once per occurrence
    pub defense_strong_against: ElementTally,
    /// Member element -> weaknesses, once per occurrence
    pub defense_weak_against: ElementTally,
}

/// Sums of each tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamTotals {
    pub attack_strong: u32,
    pub attack_weak: u32,
    pub defense_strong: u32,
    pub defense_weak: u32,
}

impl TeamTotals {
    /// Strengths minus weaknesses, comparable to a combined base score
    pub fn balance(&self) -> i64 {
        i64::from(self.attack_strong) - i64::from(self.attack_weak)
            + i64::from(self.defense_strong)
            - i64::from(self.defense_weak)
    }
}

impl TeamAnalysis {
    pub fn totals(&self) -> TeamTotals {
        TeamTotals {
            attack_strong: self.attack_strong_against.values().sum(),
            attack_weak: self.attack_weak_against.values().sum(),
            defense_strong: self.defense_strong_against.values().sum(),
            defense_weak: self.defense_weak_against.values().sum(),
        }
    }
}

/// Sum every member's contributions; duplicate members count again
pub fn analyze_team(chart: &TypeChart, roster: &[Element]) -> TeamAnalysis {
    let defense_weakness =
        ElementCounts::from_records(&chart.ranking(Statistic::LeastDefenseWeakness));
    let defense_strength =
        ElementCounts::from_records(&chart.ranking(Statistic::MostDefenseStrength));

    let mut analysis = TeamAnalysis::default();

    for &member in roster {
        for &target in chart.advantage().get(member) {
            *analysis.attack_strong_against.entry(target).or_insert(0) += 1;
        }
        for &target in chart.disadvantage().get(member) {
            *analysis.attack_weak_against.entry(target).or_insert(0) += 1;
        }
        *analysis.defense_weak_against.entry(member).or_insert(0) += defense_weakness[member];
        *analysis.defense_strong_against.entry(member).or_insert(0) += defense_strength[member];
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use typerank_chart::{ElementReport, ScoreWeights};

    use Element::*;

    #[test]
    fn test_duplicate_members_compound() {
        let chart = TypeChart::standard();
        let analysis = analyze_team(&chart, &[Fire, Fire]);

        for target in [Grass, Ice, Bug, Steel] {
            assert_eq!(analysis.attack_strong_against.get(&target), Some(&2), "{target}");
        }
        assert_eq!(analysis.attack_strong_against.len(), 4);

        for target in [Fire, Water, Rock, Dragon] {
            assert_eq!(analysis.attack_weak_against.get(&target), Some(&2), "{target}");
        }

        assert_eq!(analysis.defense_weak_against, ElementTally::from([(Fire, 6)]));
        assert_eq!(analysis.defense_strong_against, ElementTally::from([(Fire, 12)]));
    }

    #[test]
    fn test_tallies_are_partial() {
        let chart = TypeChart::standard();
        let analysis = analyze_team(&chart, &[Fire]);

        assert_eq!(analysis.attack_strong_against.get(&Normal), None);
        assert_eq!(analysis.defense_weak_against.get(&Water), None);
    }

    #[test]
    fn test_touched_zero_differs_from_absent() {
        let chart = TypeChart::standard();
        let analysis = analyze_team(&chart, &[Normal]);

        // Normal hits nothing effectively and resists nobody
        assert!(analysis.attack_strong_against.is_empty());
        assert_eq!(analysis.defense_strong_against.get(&Normal), Some(&0));
        assert_eq!(analysis.defense_weak_against.get(&Normal), Some(&1));
    }

    #[test]
    fn test_empty_roster() {
        let analysis = analyze_team(&TypeChart::standard(), &[]);
        assert_eq!(analysis, TeamAnalysis::default());
        assert_eq!(analysis.totals().balance(), 0);
    }

    #[test]
    fn test_sample_team_totals() {
        let chart = TypeChart::standard();
        let analysis = analyze_team(&chart, &[Steel, Fairy, Ghost, Water, Ground]);
        let totals = analysis.totals();

        assert_eq!(
            totals,
            TeamTotals {
                attack_strong: 16,
                attack_weak: 12,
                defense_strong: 21,
                defense_weak: 11,
            }
        );
        assert_eq!(totals.balance(), 14);
    }

    #[test]
    fn test_single_member_balance_matches_base_score() {
        let chart = TypeChart::standard();
        let report = ElementReport::build(&chart, &ScoreWeights::default()).unwrap();

        for record in &report.combined {
            let totals = analyze_team(&chart, &[record.element]).totals();
            assert_eq!(totals.balance(), record.base_score, "{}", record.element);
        }
    }

    #[test]
    fn test_team_balance_is_sum_of_member_base_scores() {
        let chart = TypeChart::standard();
        let report = ElementReport::build(&chart, &ScoreWeights::default()).unwrap();
        let roster = [Steel, Fairy, Ghost, Water, Ground];

        let expected: i64 = report
            .combined
            .iter()
            .filter(|r| roster.contains(&r.element))
            .map(|r| r.base_score)
            .sum();
        assert_eq!(analyze_team(&chart, &roster).totals().balance(), expected);
    }

    #[test]
    fn test_analysis_serializes_element_keys() {
        let analysis = analyze_team(&TypeChart::standard(), &[Electric]);
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["attack_strong_against"]["water"], 1);
        assert_eq!(json["attack_strong_against"]["flying"], 1);
        assert_eq!(json["defense_weak_against"]["electric"], 1);
    }
}
