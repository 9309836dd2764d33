//! Confidence-weighted per-class area bookkeeping.

use serde::{Deserialize, Serialize};

use super::snapshot::LandClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaChangeKind {
    Increased,
    Decreased,
}

/// Estimated area movement for one class across the observation pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassAreaChange {
    pub class: LandClass,
    pub before_area_km2: f64,
    pub after_area_km2: f64,
    /// Signed delta; negative for a decrease.
    pub change_km2: f64,
    pub percentage_change: f64,
    pub change_type: AreaChangeKind,
    pub description: String,
}

/// Per-class area estimate for a significant cross-class transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaChangeEstimate {
    /// The shrinking (before) class followed by the growing (after) class.
    pub changes: Vec<ClassAreaChange>,
}
