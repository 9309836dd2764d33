//! Static per-class environmental data: health scores, transition priors,
//! and the critical-transition table.
//!
//! Built once at startup into an immutable [`Taxonomy`]; nothing here is
//! mutated at runtime.

pub mod scores;
pub mod transitions;

pub use transitions::TransitionMatrix;

use crate::config::AnalysisConfig;
use crate::constants::DEFAULT_ENV_SCORE;
use crate::types::collections::FxHashMap;
use crate::types::snapshot::LandClass;

/// Immutable taxonomy data consulted by the scorer and predictor.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    scores: FxHashMap<LandClass, f64>,
    matrix: TransitionMatrix,
    critical: Vec<transitions::CriticalTransition>,
}

impl Taxonomy {
    /// Taxonomy with the built-in reference data.
    pub fn builtin() -> Self {
        Self {
            scores: scores::builtin_scores(),
            matrix: TransitionMatrix::from_weights(
                crate::constants::SELF_TRANSITION_PRIOR,
                &transitions::builtin_weights(),
            ),
            critical: transitions::critical_transitions(),
        }
    }

    /// Taxonomy with config overrides applied on top of the built-in data.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let mut scores = scores::builtin_scores();
        for (&class, &score) in &config.environmental_scores {
            scores.insert(class, score);
        }
        Self {
            scores,
            matrix: TransitionMatrix::from_weights(
                config.effective_self_transition_prior(),
                &transitions::builtin_weights(),
            ),
            critical: transitions::critical_transitions(),
        }
    }

    /// Environmental health score of a class, in `[0, 1]`. Classes missing
    /// from the table score [`DEFAULT_ENV_SCORE`].
    pub fn score(&self, class: LandClass) -> f64 {
        self.scores.get(&class).copied().unwrap_or(DEFAULT_ENV_SCORE)
    }

    pub fn transition_matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Whether a transition is in the hand-specified critical table
    /// (conversion of natural land to built/agricultural use).
    pub fn is_critical_transition(&self, from: LandClass, to: LandClass) -> bool {
        self.critical
            .iter()
            .any(|ct| ct.from.contains(&from) && ct.to.contains(&to))
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scores_cover_all_classes() {
        let tax = Taxonomy::builtin();
        for class in LandClass::ALL {
            let s = tax.score(class);
            assert!((0.0..=1.0).contains(&s), "{class} score {s} out of range");
        }
        assert_eq!(tax.score(LandClass::Forest), 1.0);
        assert_eq!(tax.score(LandClass::Industrial), 0.1);
    }

    #[test]
    fn forest_to_cropland_is_critical() {
        let tax = Taxonomy::builtin();
        assert!(tax.is_critical_transition(LandClass::Forest, LandClass::AnnualCrop));
        assert!(tax.is_critical_transition(LandClass::River, LandClass::Industrial));
        assert!(tax.is_critical_transition(LandClass::Pasture, LandClass::Highway));
        assert!(!tax.is_critical_transition(LandClass::AnnualCrop, LandClass::Forest));
        assert!(!tax.is_critical_transition(LandClass::Pasture, LandClass::Residential));
    }

    #[test]
    fn config_overrides_replace_builtin_scores() {
        let mut config = AnalysisConfig::default();
        config.environmental_scores.insert(LandClass::Highway, 0.4);
        let tax = Taxonomy::from_config(&config);
        assert_eq!(tax.score(LandClass::Highway), 0.4);
        // Untouched entries keep builtin values.
        assert_eq!(tax.score(LandClass::Forest), 1.0);
    }
}
