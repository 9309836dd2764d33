//! Maps a detected change to an environmental impact classification.

use std::sync::Arc;

use landshift_core::taxonomy::Taxonomy;
use landshift_core::types::change::ChangeRecord;
use landshift_core::types::impact::{EnvironmentalImpact, ImpactType};

/// Thresholds on the weighted impact score. A critical transition forces
/// the degradation branch regardless of score.
const SEVERE_THRESHOLD: f64 = -0.15;
const DEGRADATION_THRESHOLD: f64 = -0.05;
const MODERATE_THRESHOLD: f64 = -0.01;
const IMPROVEMENT_THRESHOLD: f64 = 0.01;

/// Classifies the environmental impact of a change record against the
/// taxonomy score table and the critical-transition list.
#[derive(Debug, Clone)]
pub struct ImpactScorer {
    taxonomy: Arc<Taxonomy>,
}

impl ImpactScorer {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Score a change record. Insignificant changes are always neutral
    /// with a zero score.
    pub fn score(&self, change: &ChangeRecord) -> EnvironmentalImpact {
        if !change.is_significant {
            return EnvironmentalImpact::neutral();
        }

        let before_class = change.before_class();
        let after_class = change.after_class();
        let before_score = self.taxonomy.score(before_class);
        let after_score = self.taxonomy.score(after_class);

        let raw_diff = after_score - before_score;
        let weighted_impact = raw_diff * change.change_magnitude;
        let is_critical = self.taxonomy.is_critical_transition(before_class, after_class);

        // First match wins; order matters.
        let (impact_type, description) = if is_critical || weighted_impact < DEGRADATION_THRESHOLD {
            let impact_type = if is_critical || weighted_impact < SEVERE_THRESHOLD {
                ImpactType::SevereDegradation
            } else {
                ImpactType::ModerateDegradation
            };
            (
                impact_type,
                format!("Environmental degradation detected: {before_class} → {after_class}"),
            )
        } else if weighted_impact < MODERATE_THRESHOLD {
            (
                ImpactType::ModerateDegradation,
                format!("Moderate environmental impact: {before_class} → {after_class}"),
            )
        } else if weighted_impact > IMPROVEMENT_THRESHOLD {
            (
                ImpactType::Improvement,
                format!("Environmental improvement: {before_class} → {after_class}"),
            )
        } else if before_class != after_class {
            (
                ImpactType::NoteworthyChange,
                format!("Land use transition detected: {before_class} → {after_class}"),
            )
        } else {
            (
                ImpactType::Neutral,
                format!("Minimal environmental impact: {before_class} → {after_class}"),
            )
        };

        EnvironmentalImpact {
            impact_score: weighted_impact,
            impact_type,
            description,
            before_env_score: before_score,
            after_env_score: after_score,
        }
    }
}
