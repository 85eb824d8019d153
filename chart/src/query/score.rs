//! Composite scoring of the six statistics

use std::collections::BTreeSet;

use thiserror::Error;

use crate::query::Statistic;
use crate::types::{CombinedRecord, CountRecord, Element, ElementCounts, TypeChart};

/// The six rankings the composite score is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreInputs {
    pub most_attack_strength: Vec<CountRecord>,
    pub least_attack_weakness: Vec<CountRecord>,
    pub most_defense_strength: Vec<CountRecord>,
    pub least_defense_weakness: Vec<CountRecord>,
    pub most_super_defense_strength: Vec<CountRecord>,
    pub least_super_attack_weakness: Vec<CountRecord>,
}

impl ScoreInputs {
    /// Rankings computed from a chart
    pub fn from_chart(chart: &TypeChart) -> Self {
        Self {
            most_attack_strength: chart.ranking(Statistic::MostAttackStrength),
            least_attack_weakness: chart.ranking(Statistic::LeastAttackWeakness),
            most_defense_strength: chart.ranking(Statistic::MostDefenseStrength),
            least_defense_weakness: chart.ranking(Statistic::LeastDefenseWeakness),
            most_super_defense_strength: chart.ranking(Statistic::MostSuperDefenseStrength),
            least_super_attack_weakness: chart.ranking(Statistic::LeastSuperAttackWeakness),
        }
    }

    /// The ranking for one statistic
    pub fn get(&self, statistic: Statistic) -> &[CountRecord] {
        match statistic {
            Statistic::MostAttackStrength => &self.most_attack_strength,
            Statistic::LeastAttackWeakness => &self.least_attack_weakness,
            Statistic::MostDefenseStrength => &self.most_defense_strength,
            Statistic::LeastDefenseWeakness => &self.least_defense_weakness,
            Statistic::MostSuperDefenseStrength => &self.most_super_defense_strength,
            Statistic::LeastSuperAttackWeakness => &self.least_super_attack_weakness,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScoreInputs {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(Statistic::ALL.iter().map(|s| (s.as_str(), self.get(*s))))
    }
}

/// Multipliers applied to the two super statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreWeights {
    pub super_defense_strength: i32,
    pub super_attack_weakness: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            super_defense_strength: 2,
            super_attack_weakness: 2,
        }
    }
}

/// The six rankings cannot be combined
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{statistic} has {actual} records, expected {expected}")]
    LengthMismatch {
        statistic: Statistic,
        expected: usize,
        actual: usize,
    },

    #[error("{statistic} lists {element} more than once")]
    DuplicateElement {
        statistic: Statistic,
        element: Element,
    },

    #[error("{statistic} does not cover the same elements as {reference}")]
    ElementSetMismatch {
        statistic: Statistic,
        reference: Statistic,
    },

    #[error("score for {element} does not fit in 64 bits")]
    ScoreOverflow { element: Element },
}

/// Combine the six rankings into one ranked record per element
///
/// Records come out ordered by `score` descending, then `base_score`
/// descending, then by position in `most_attack_strength`.
pub fn score(
    inputs: &ScoreInputs,
    weights: &ScoreWeights,
) -> Result<Vec<CombinedRecord>, ValidationError> {
    validate(inputs)?;

    let attack_strength = ElementCounts::from_records(&inputs.most_attack_strength);
    let attack_weakness = ElementCounts::from_records(&inputs.least_attack_weakness);
    let defense_strength = ElementCounts::from_records(&inputs.most_defense_strength);
    let defense_weakness = ElementCounts::from_records(&inputs.least_defense_weakness);
    let super_defense_strength = ElementCounts::from_records(&inputs.most_super_defense_strength);
    let super_attack_weakness = ElementCounts::from_records(&inputs.least_super_attack_weakness);

    let mut records = inputs
        .most_attack_strength
        .iter()
        .map(|r| -> Result<CombinedRecord, ValidationError> {
            let element = r.element;
            let mut record = CombinedRecord {
                element,
                attack_strength: attack_strength[element],
                attack_weakness: attack_weakness[element],
                defense_strength: defense_strength[element],
                defense_weakness: defense_weakness[element],
                super_defense_strength: super_defense_strength[element],
                super_attack_weakness: super_attack_weakness[element],
                base_score: 0,
                score: 0,
            };
            record.base_score = i64::from(record.attack_strength)
                - i64::from(record.attack_weakness)
                + i64::from(record.defense_strength)
                - i64::from(record.defense_weakness);
            record.score = weighted_score(&record, weights)
                .ok_or(ValidationError::ScoreOverflow { element })?;
            Ok(record)
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    records.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.base_score.cmp(&a.base_score))
    });

    Ok(records)
}

fn weighted_score(record: &CombinedRecord, weights: &ScoreWeights) -> Option<i64> {
    let bonus = i64::from(record.super_defense_strength)
        .checked_mul(i64::from(weights.super_defense_strength))?;
    let penalty = i64::from(record.super_attack_weakness)
        .checked_mul(i64::from(weights.super_attack_weakness))?;
    record.base_score.checked_add(bonus)?.checked_sub(penalty)
}

/// [`score`], logging a validation failure and returning no records instead
pub fn score_or_empty(inputs: &ScoreInputs, weights: &ScoreWeights) -> Vec<CombinedRecord> {
    match score(inputs, weights) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "Statistic rankings are not comparable, skipping scoring");
            Vec::new()
        }
    }
}

fn validate(inputs: &ScoreInputs) -> Result<(), ValidationError> {
    let reference = Statistic::MostAttackStrength;
    let reference_records = inputs.get(reference);
    let expected = element_set(reference, reference_records)?;

    for statistic in &Statistic::ALL[1..] {
        let records = inputs.get(*statistic);
        if records.len() != reference_records.len() {
            return Err(ValidationError::LengthMismatch {
                statistic: *statistic,
                expected: reference_records.len(),
                actual: records.len(),
            });
        }
        if element_set(*statistic, records)? != expected {
            return Err(ValidationError::ElementSetMismatch {
                statistic: *statistic,
                reference,
            });
        }
    }

    Ok(())
}

fn element_set(
    statistic: Statistic,
    records: &[CountRecord],
) -> Result<BTreeSet<Element>, ValidationError> {
    let mut set = BTreeSet::new();
    for record in records {
        if !set.insert(record.element) {
            return Err(ValidationError::DuplicateElement {
                statistic,
                element: record.element,
            });
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_inputs() -> ScoreInputs {
        ScoreInputs::from_chart(&TypeChart::standard())
    }

    fn find(records: &[CombinedRecord], element: Element) -> (usize, CombinedRecord) {
        records
            .iter()
            .copied()
            .enumerate()
            .find(|(_, r)| r.element == element)
            .unwrap()
    }

    #[test]
    fn test_score_fire_worked_example() {
        let records = score(&standard_inputs(), &ScoreWeights::default()).unwrap();
        let (position, fire) = find(&records, Element::Fire);

        assert_eq!(fire.attack_strength, 4);
        assert_eq!(fire.attack_weakness, 4);
        assert_eq!(fire.defense_strength, 6);
        assert_eq!(fire.defense_weakness, 3);
        assert_eq!(fire.super_defense_strength, 0);
        assert_eq!(fire.super_attack_weakness, 0);
        assert_eq!(fire.base_score, 3);
        assert_eq!(fire.score, 3);
        assert!(position < 5, "fire ranked {position}");
    }

    #[test]
    fn test_score_standard_order() {
        let records = score(&standard_inputs(), &ScoreWeights::default()).unwrap();
        let top: Vec<(Element, i64)> = records
            .iter()
            .take(5)
            .map(|r| (r.element, r.score))
            .collect();

        assert_eq!(
            top,
            vec![
                (Element::Steel, 8),
                (Element::Fairy, 4),
                (Element::Ghost, 4),
                (Element::Fire, 3),
                (Element::Ground, 2),
            ]
        );
        let last = records.last().unwrap();
        assert_eq!((last.element, last.score), (Element::Grass, -5));
    }

    #[test]
    fn test_score_tie_break_on_base_score() {
        let records = score(&standard_inputs(), &ScoreWeights::default()).unwrap();
        // Water and Flying both score 2; Water's base score is higher
        let (water_pos, water) = find(&records, Element::Water);
        let (flying_pos, flying) = find(&records, Element::Flying);

        assert_eq!(water.score, flying.score);
        assert!(water.base_score > flying.base_score);
        assert!(water_pos < flying_pos);
    }

    #[test]
    fn test_score_full_tie_keeps_input_order() {
        let records = score(&standard_inputs(), &ScoreWeights::default()).unwrap();
        // Fairy and Ghost tie on both keys; Fairy comes first in the attack ranking
        let (fairy_pos, fairy) = find(&records, Element::Fairy);
        let (ghost_pos, ghost) = find(&records, Element::Ghost);

        assert_eq!((fairy.score, fairy.base_score), (ghost.score, ghost.base_score));
        assert_eq!(ghost_pos, fairy_pos + 1);
    }

    #[test]
    fn test_score_is_sorted() {
        let records = score(&standard_inputs(), &ScoreWeights::default()).unwrap();
        assert_eq!(records.len(), Element::COUNT);
        assert!(records.windows(2).all(|w| {
            w[0].score > w[1].score
                || (w[0].score == w[1].score && w[0].base_score >= w[1].base_score)
        }));
    }

    #[test]
    fn test_score_weights_apply_to_super_statistics() {
        let weights = ScoreWeights {
            super_defense_strength: 0,
            super_attack_weakness: 0,
        };
        let records = score(&standard_inputs(), &weights).unwrap();
        assert!(records.iter().all(|r| r.score == r.base_score));

        let heavy = ScoreWeights {
            super_defense_strength: 5,
            super_attack_weakness: 1,
        };
        let records = score(&standard_inputs(), &heavy).unwrap();
        let (_, ghost) = find(&records, Element::Ghost);
        assert_eq!(ghost.score, ghost.base_score + 2 * 5 - 1);
    }

    #[test]
    fn test_score_large_weights_widen_instead_of_wrapping() {
        let weights = ScoreWeights {
            super_defense_strength: 2_000_000_000,
            super_attack_weakness: 2,
        };
        let records = score(&standard_inputs(), &weights).unwrap();

        assert_eq!(records[0].element, Element::Ghost);
        assert_eq!(records[0].score, records[0].base_score + 4_000_000_000 - 2);
    }

    #[test]
    fn test_score_overflow_is_an_error() {
        let record = |count| {
            vec![CountRecord {
                element: Element::Normal,
                count,
            }]
        };
        let inputs = ScoreInputs {
            most_attack_strength: record(u32::MAX),
            least_attack_weakness: record(0),
            most_defense_strength: record(u32::MAX),
            least_defense_weakness: record(0),
            most_super_defense_strength: record(u32::MAX),
            least_super_attack_weakness: record(0),
        };
        let weights = ScoreWeights {
            super_defense_strength: i32::MAX,
            super_attack_weakness: 0,
        };

        assert_eq!(
            score(&inputs, &weights),
            Err(ValidationError::ScoreOverflow {
                element: Element::Normal
            })
        );
        assert!(score_or_empty(&inputs, &weights).is_empty());
    }

    #[test]
    fn test_score_rejects_short_input() {
        let mut inputs = standard_inputs();
        inputs.least_super_attack_weakness.pop();

        assert!(matches!(
            score(&inputs, &ScoreWeights::default()),
            Err(ValidationError::LengthMismatch {
                statistic: Statistic::LeastSuperAttackWeakness,
                expected: 18,
                actual: 17,
            })
        ));
        assert!(score_or_empty(&inputs, &ScoreWeights::default()).is_empty());
    }

    #[test]
    fn test_score_rejects_non_adjacent_mismatch() {
        // Lengths 18, 17, 18, 17, 18, 18 would slip past an adjacent-pair check
        let mut inputs = standard_inputs();
        inputs.least_attack_weakness.pop();
        inputs.least_defense_weakness.pop();

        assert!(score(&inputs, &ScoreWeights::default()).is_err());
    }

    #[test]
    fn test_score_rejects_same_length_different_elements() {
        let mut inputs = standard_inputs();
        inputs.most_defense_strength[0].element = Element::Normal;

        let err = score(&inputs, &ScoreWeights::default()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::DuplicateElement {
                statistic: Statistic::MostDefenseStrength,
                element: Element::Normal,
            }
        ));
    }

    #[test]
    fn test_score_accepts_matching_subsets() {
        let mut inputs = standard_inputs();
        for statistic in Statistic::ALL {
            let keep = |r: &CountRecord| r.element != Element::Bug;
            match statistic {
                Statistic::MostAttackStrength => inputs.most_attack_strength.retain(keep),
                Statistic::LeastAttackWeakness => inputs.least_attack_weakness.retain(keep),
                Statistic::MostDefenseStrength => inputs.most_defense_strength.retain(keep),
                Statistic::LeastDefenseWeakness => inputs.least_defense_weakness.retain(keep),
                Statistic::MostSuperDefenseStrength => {
                    inputs.most_super_defense_strength.retain(keep)
                }
                Statistic::LeastSuperAttackWeakness => {
                    inputs.least_super_attack_weakness.retain(keep)
                }
            }
        }

        let records = score(&inputs, &ScoreWeights::default()).unwrap();
        assert_eq!(records.len(), Element::COUNT - 1);
        assert!(records.iter().all(|r| r.element != Element::Bug));
    }

    #[test]
    fn test_score_does_not_depend_on_input_order_of_other_rankings() {
        let mut inputs = standard_inputs();
        inputs.least_defense_weakness.reverse();
        inputs.most_super_defense_strength.reverse();

        assert_eq!(
            score(&inputs, &ScoreWeights::default()).unwrap(),
            score(&standard_inputs(), &ScoreWeights::default()).unwrap()
        );
    }
}
