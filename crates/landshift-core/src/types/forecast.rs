//! Forward projection of the class distribution.

use serde::{Deserialize, Serialize};

use super::snapshot::LandClass;

/// Direction label for a forecast entry, relative to the current
/// (after-change) class's environmental score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FutureImpactLabel {
    SignificantImprovement,
    MinorImprovement,
    Stable,
    MinorDegradation,
    SignificantDegradation,
}

impl FutureImpactLabel {
    pub fn is_degradation(self) -> bool {
        matches!(
            self,
            FutureImpactLabel::SignificantDegradation | FutureImpactLabel::MinorDegradation
        )
    }
}

/// One projected land type with its end-of-horizon probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPrediction {
    pub land_type: LandClass,
    pub probability: f64,
    pub environmental_impact: FutureImpactLabel,
}

/// Markov-chain forecast over the configured horizon. Recomputed on
/// demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureTrendForecast {
    /// Top predictions, sorted descending by probability.
    pub predictions: Vec<TrendPrediction>,
    /// In `[0, 1]`; higher for faster observed change.
    pub confidence: f64,
}

impl FutureTrendForecast {
    /// Forecast returned when no significant change was observed or no
    /// time has elapsed. A defined empty result, not an error.
    pub fn empty() -> Self {
        Self {
            predictions: Vec::new(),
            confidence: 0.0,
        }
    }

    /// Whether any kept prediction is labeled as degrading.
    pub fn has_degrading_prediction(&self) -> bool {
        self.predictions
            .iter()
            .any(|p| p.environmental_impact.is_degradation())
    }
}
