//! Detected change between two classification snapshots.

use serde::{Deserialize, Serialize};

use super::snapshot::{ClassificationSnapshot, LandClass, ProbVec};

/// Outcome of comparing a before/after snapshot pair. Derived, immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub before: ClassificationSnapshot,
    pub after: ClassificationSnapshot,
    /// Elementwise `after - before`, kept for downstream diagnostics and
    /// visualization. Not used in scoring.
    pub probability_difference: ProbVec,
    pub is_significant: bool,
    /// `|before_conf - after_conf|` when significant, else 0.
    pub change_magnitude: f64,
}

impl ChangeRecord {
    pub fn before_class(&self) -> LandClass {
        self.before.predicted
    }

    pub fn after_class(&self) -> LandClass {
        self.after.predicted
    }

    /// Whether the argmax class differs between the two snapshots,
    /// regardless of significance.
    pub fn is_cross_class(&self) -> bool {
        self.before.predicted != self.after.predicted
    }
}
