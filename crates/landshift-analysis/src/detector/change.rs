//! Compares two class-probability vectors and decides whether a real
//! land-cover change occurred.

use landshift_core::errors::AnalysisError;
use landshift_core::types::change::ChangeRecord;
use landshift_core::types::snapshot::{ClassificationSnapshot, ProbVec, NUM_CLASSES};

/// Pure numeric change detector. A change is significant only when the
/// argmax class differs between the two vectors AND both endpoint
/// confidences clear the threshold.
#[derive(Debug, Clone)]
pub struct ChangeDetector {
    threshold: f64,
}

impl ChangeDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compare two probability vectors. Fails fast on a length mismatch
    /// against the taxonomy size; no other error conditions.
    pub fn detect(&self, before: &ProbVec, after: &ProbVec) -> Result<ChangeRecord, AnalysisError> {
        for probs in [before, after] {
            if probs.len() != NUM_CLASSES {
                return Err(AnalysisError::VectorLengthMismatch {
                    expected: NUM_CLASSES,
                    actual: probs.len(),
                });
            }
        }

        // from_probabilities only fails on an empty vector, excluded above.
        let before_snap = ClassificationSnapshot::from_probabilities(before.clone())
            .ok_or(AnalysisError::VectorLengthMismatch {
                expected: NUM_CLASSES,
                actual: 0,
            })?;
        let after_snap = ClassificationSnapshot::from_probabilities(after.clone())
            .ok_or(AnalysisError::VectorLengthMismatch {
                expected: NUM_CLASSES,
                actual: 0,
            })?;

        let probability_difference: ProbVec = after
            .iter()
            .zip(before.iter())
            .map(|(a, b)| a - b)
            .collect();

        let is_significant = before_snap.predicted != after_snap.predicted
            && before_snap.confidence > self.threshold
            && after_snap.confidence > self.threshold;

        let change_magnitude = if is_significant {
            (before_snap.confidence - after_snap.confidence).abs()
        } else {
            0.0
        };

        Ok(ChangeRecord {
            before: before_snap,
            after: after_snap,
            probability_difference,
            is_significant,
            change_magnitude,
        })
    }
}

impl Default for ChangeDetector {
    fn default() -> Self {
        Self::new(landshift_core::constants::DEFAULT_CHANGE_THRESHOLD)
    }
}
