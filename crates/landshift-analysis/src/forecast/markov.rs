//! Projects the class distribution forward by stepping the static
//! transition matrix, amplified by the observed annual rate of change and
//! attenuated for long horizons.

use std::sync::Arc;

use landshift_core::constants::{
    DECAY_BASE, DECAY_HORIZON_SCALE, FORECAST_PROB_FLOOR, FORECAST_TOP_K,
};
use landshift_core::errors::AnalysisError;
use landshift_core::taxonomy::Taxonomy;
use landshift_core::types::change::ChangeRecord;
use landshift_core::types::forecast::{FutureImpactLabel, FutureTrendForecast, TrendPrediction};
use landshift_core::types::snapshot::{LandClass, ProbVec, NUM_CLASSES};

/// Bands on the taxonomy-score difference used to label forecast entries.
const SIGNIFICANT_BAND: f64 = 0.2;
const MINOR_BAND: f64 = 0.05;

/// Markov extrapolation of future land-cover probabilities.
#[derive(Debug, Clone)]
pub struct TrendPredictor {
    taxonomy: Arc<Taxonomy>,
    min_horizon: u32,
    max_horizon: u32,
}

impl TrendPredictor {
    pub fn new(taxonomy: Arc<Taxonomy>, min_horizon: u32, max_horizon: u32) -> Self {
        Self {
            taxonomy,
            min_horizon,
            max_horizon,
        }
    }

    /// Project `horizon_years` into the future. Returns the empty forecast
    /// (not an error) when the change is insignificant or no time elapsed
    /// between the observations.
    pub fn predict(
        &self,
        change: &ChangeRecord,
        years_elapsed: u32,
        horizon_years: u32,
    ) -> Result<FutureTrendForecast, AnalysisError> {
        if horizon_years < self.min_horizon || horizon_years > self.max_horizon {
            return Err(AnalysisError::InvalidHorizon {
                horizon: horizon_years,
                min: self.min_horizon,
                max: self.max_horizon,
            });
        }

        if !change.is_significant || years_elapsed == 0 {
            return Ok(FutureTrendForecast::empty());
        }

        let annual_rate = change.change_magnitude / years_elapsed as f64;
        let decay = DECAY_BASE.powf(horizon_years as f64 / DECAY_HORIZON_SCALE);
        let matrix = self.taxonomy.transition_matrix();

        // One-hot at the after class, then one step per horizon year:
        // diffuse along the transition priors, re-amplify by the observed
        // rate, and renormalize back to a distribution.
        let mut probs = ProbVec::from_elem(0.0, NUM_CLASSES);
        probs[change.after_class().index()] = 1.0;

        let year_factor = (annual_rate * decay) + 1.0;
        for _ in 0..horizon_years {
            probs = matrix.step(&probs);
            for p in probs.iter_mut() {
                *p *= year_factor;
            }
            let sum: f64 = probs.iter().sum();
            if sum > 0.0 {
                for p in probs.iter_mut() {
                    *p /= sum;
                }
            }
        }

        let after_score = self.taxonomy.score(change.after_class());
        let mut predictions: Vec<TrendPrediction> = probs
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > FORECAST_PROB_FLOOR)
            .filter_map(|(i, &p)| {
                let land_type = LandClass::from_index(i)?;
                Some(TrendPrediction {
                    land_type,
                    probability: p,
                    environmental_impact: self.label(after_score, land_type),
                })
            })
            .collect();

        predictions.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        predictions.truncate(FORECAST_TOP_K);

        Ok(FutureTrendForecast {
            predictions,
            confidence: (annual_rate * 2.0).min(1.0),
        })
    }

    /// Label a candidate future class by its score relative to the current
    /// (after-change) class.
    fn label(&self, current_score: f64, future: LandClass) -> FutureImpactLabel {
        let diff = self.taxonomy.score(future) - current_score;
        if diff > SIGNIFICANT_BAND {
            FutureImpactLabel::SignificantImprovement
        } else if diff > MINOR_BAND {
            FutureImpactLabel::MinorImprovement
        } else if diff < -SIGNIFICANT_BAND {
            FutureImpactLabel::SignificantDegradation
        } else if diff < -MINOR_BAND {
            FutureImpactLabel::MinorDegradation
        } else {
            FutureImpactLabel::Stable
        }
    }
}
