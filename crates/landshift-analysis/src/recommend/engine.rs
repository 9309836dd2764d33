//! Primary-or-fallback recommendation dispatch.

use std::time::Duration;

use tracing::warn;

use landshift_core::config::{RecommenderConfig, RecommenderMode};
use landshift_core::types::change::ChangeRecord;
use landshift_core::types::forecast::FutureTrendForecast;
use landshift_core::types::impact::{EnvironmentalImpact, ImpactType};

use super::generator::{
    dedup_and_cap, RecommendationGenerator, RecommendationRequest, RuleBasedGenerator,
};
use super::remote::RemoteGenerator;

/// Holds an optional primary generator plus the deterministic fallback.
/// A primary failure is logged and recovered locally; callers never see
/// it as an error.
pub struct RecommendationEngine {
    primary: Option<Box<dyn RecommendationGenerator>>,
    fallback: RuleBasedGenerator,
}

impl RecommendationEngine {
    /// Rule-based engine with no external collaborator.
    pub fn rule_based() -> Self {
        Self {
            primary: None,
            fallback: RuleBasedGenerator::new(),
        }
    }

    /// Engine with a custom primary generator.
    pub fn with_primary(primary: Box<dyn RecommendationGenerator>) -> Self {
        Self {
            primary: Some(primary),
            fallback: RuleBasedGenerator::new(),
        }
    }

    /// Build from config: `remote` mode wires the HTTP generator when an
    /// endpoint is configured, anything else stays rule-based.
    pub fn from_config(config: &RecommenderConfig) -> Self {
        match (config.mode, config.endpoint.as_deref()) {
            (RecommenderMode::Remote, Some(endpoint)) => {
                let timeout = Duration::from_millis(config.effective_timeout_ms());
                Self::with_primary(Box::new(RemoteGenerator::new(endpoint.to_string(), timeout)))
            }
            (RecommenderMode::Remote, None) => {
                warn!("remote recommender configured without endpoint; using rule-based fallback");
                Self::rule_based()
            }
            (RecommenderMode::RuleBased, _) => Self::rule_based(),
        }
    }

    /// Produce recommendations for a scored change. Deduplicated,
    /// first-occurrence order, at most 10 items.
    pub fn recommend(
        &self,
        change: &ChangeRecord,
        impact: &EnvironmentalImpact,
        forecast: &FutureTrendForecast,
    ) -> Vec<String> {
        let request = RecommendationRequest {
            before_class: change.before_class(),
            after_class: change.after_class(),
            impact_type: impact.impact_type,
            change_magnitude: change.change_magnitude,
            forecast: forecast.clone(),
        };

        if let Some(primary) = &self.primary {
            // Noteworthy transitions are upgraded for the collaborator so
            // it produces substantive guidance; the rule table keeps the
            // original type.
            let mut upgraded = request.clone();
            if upgraded.impact_type == ImpactType::NoteworthyChange {
                upgraded.impact_type = ImpactType::ModerateDegradation;
            }
            match primary.generate(&upgraded) {
                Ok(items) => return dedup_and_cap(items.into_iter()),
                Err(e) => {
                    warn!(error = %e, "primary recommendation generator failed, using fallback");
                }
            }
        }

        // The rule table is infallible.
        self.fallback
            .generate(&request)
            .unwrap_or_default()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::rule_based()
    }
}
