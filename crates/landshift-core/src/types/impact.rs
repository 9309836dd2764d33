//! Environmental impact classification of a detected change.

use serde::{Deserialize, Serialize};

/// Severity bucket assigned by the impact scorer. Wire names match the
/// snake_case labels the surrounding layers already consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactType {
    SevereDegradation,
    ModerateDegradation,
    Improvement,
    NoteworthyChange,
    Neutral,
}

impl ImpactType {
    pub fn is_degradation(self) -> bool {
        matches!(
            self,
            ImpactType::SevereDegradation | ImpactType::ModerateDegradation
        )
    }
}

/// Scored environmental impact of one change record. Derived, immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    /// Signed weighted impact: taxonomy score delta scaled by magnitude.
    pub impact_score: f64,
    pub impact_type: ImpactType,
    pub description: String,
    pub before_env_score: f64,
    pub after_env_score: f64,
}

impl EnvironmentalImpact {
    /// The neutral result returned for insignificant changes.
    pub fn neutral() -> Self {
        Self {
            impact_score: 0.0,
            impact_type: ImpactType::Neutral,
            description: "No significant change detected".to_string(),
            before_env_score: 0.0,
            after_env_score: 0.0,
        }
    }
}
