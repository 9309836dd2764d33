//! Confidence-weighted area bookkeeping for a detected transition.
//!
//! Works entirely from classifier confidences over a nominal patch area;
//! this core never decodes imagery, so pixel masking stays upstream.

use landshift_core::constants::{AREA_EPSILON, AREA_TRANSFER_FRACTION, PATCH_AREA_KM2};
use landshift_core::types::area::{AreaChangeEstimate, AreaChangeKind, ClassAreaChange};
use landshift_core::types::change::ChangeRecord;

/// Estimates per-class area movement for significant cross-class changes.
#[derive(Debug, Clone)]
pub struct AreaEstimator {
    patch_area_km2: f64,
}

impl Default for AreaEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl AreaEstimator {
    pub fn new() -> Self {
        Self {
            patch_area_km2: PATCH_AREA_KM2,
        }
    }

    pub fn with_patch_area(patch_area_km2: f64) -> Self {
        Self { patch_area_km2 }
    }

    /// Estimate area movement. Returns `None` unless the change is
    /// significant and crosses classes; there is no area story to tell
    /// for a same-class pair.
    pub fn estimate(&self, change: &ChangeRecord) -> Option<AreaChangeEstimate> {
        if !change.is_significant || !change.is_cross_class() {
            return None;
        }

        let before_class = change.before_class();
        let after_class = change.after_class();

        let before_area = change.before.confidence * self.patch_area_km2;
        let after_area = change.after.confidence * self.patch_area_km2;

        // AREA_TRANSFER_FRACTION of the before-class area is assumed to
        // have become the after class.
        let before_decrease = before_area * AREA_TRANSFER_FRACTION;
        let before_remaining = before_area - before_decrease;

        let after_increase = after_area * AREA_TRANSFER_FRACTION;
        let after_existing = after_area - after_increase;

        let decrease = ClassAreaChange {
            class: before_class,
            before_area_km2: before_area,
            after_area_km2: before_remaining,
            change_km2: -before_decrease,
            percentage_change: -AREA_TRANSFER_FRACTION * 100.0,
            change_type: AreaChangeKind::Decreased,
            description: format!(
                "{before_class} area decreased by {:.1}% (from {before_area:.2} km² → {before_remaining:.2} km², -{before_decrease:.2} km²)",
                AREA_TRANSFER_FRACTION * 100.0
            ),
        };

        let increase_pct = (after_increase / (after_existing + AREA_EPSILON)) * 100.0;
        let increase = ClassAreaChange {
            class: after_class,
            before_area_km2: after_existing,
            after_area_km2: after_area,
            change_km2: after_increase,
            percentage_change: increase_pct,
            change_type: AreaChangeKind::Increased,
            description: format!(
                "{after_class} area increased by {increase_pct:.1}% (from {after_existing:.2} km² → {after_area:.2} km², +{after_increase:.2} km²)"
            ),
        };

        Some(AreaChangeEstimate {
            changes: vec![decrease, increase],
        })
    }
}
