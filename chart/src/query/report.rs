//! Full per-element report: the six rankings and the combined ranking

use crate::query::{ScoreInputs, ScoreWeights, Statistic, ValidationError, score};
use crate::types::{CombinedRecord, CountRecord, TypeChart};

/// Everything the element ranking produces for one chart
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementReport {
    #[cfg_attr(feature = "serde", serde(rename = "rankings"))]
    pub inputs: ScoreInputs,
    pub weights: ScoreWeights,
    pub combined: Vec<CombinedRecord>,
}

impl ElementReport {
    pub fn build(chart: &TypeChart, weights: &ScoreWeights) -> Result<Self, ValidationError> {
        let inputs = ScoreInputs::from_chart(chart);
        let combined = score(&inputs, weights)?;
        Ok(Self {
            inputs,
            weights: *weights,
            combined,
        })
    }

    /// Rankings in [`Statistic::ALL`] order
    pub fn rankings(&self) -> impl Iterator<Item = (Statistic, &[CountRecord])> + '_ {
        Statistic::ALL
            .iter()
            .map(move |statistic| (*statistic, self.inputs.get(*statistic)))
    }
}
