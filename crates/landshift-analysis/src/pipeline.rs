//! End-to-end analysis of one before/after snapshot pair.
//!
//! Orchestrates detector → {impact scorer, trend predictor} → time-series
//! update → recommendation engine and aggregates the result object handed
//! back to the web layer.

use serde::Serialize;
use tracing::{debug, info};

use landshift_core::config::AnalysisConfig;
use landshift_core::errors::AnalysisError;
use landshift_core::taxonomy::Taxonomy;
use landshift_core::types::area::AreaChangeEstimate;
use landshift_core::types::change::ChangeRecord;
use landshift_core::types::forecast::FutureTrendForecast;
use landshift_core::types::impact::{EnvironmentalImpact, ImpactType};
use landshift_core::types::snapshot::ProbVec;
use landshift_core::types::temporal::{TemporalAnalysis, TrendReport};

use crate::area::AreaEstimator;
use crate::detector::ChangeDetector;
use crate::forecast::TrendPredictor;
use crate::impact::ImpactScorer;
use crate::recommend::RecommendationEngine;
use crate::temporal::SessionStore;

use std::sync::Arc;

/// Aggregate result returned to the caller. Every numeric field is a
/// plain finite number; downstream JSON serialization relies on it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub change_info: ChangeRecord,
    pub environmental_impact: EnvironmentalImpact,
    pub future_trends: FutureTrendForecast,
    pub temporal_analysis: TemporalAnalysis,
    pub trend_report: TrendReport,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_changes: Option<AreaChangeEstimate>,
    pub years_passed: u32,
}

/// The assembled analysis engine. Pure apart from the session store;
/// safe to share across request handlers.
pub struct AnalysisPipeline {
    detector: ChangeDetector,
    scorer: ImpactScorer,
    predictor: TrendPredictor,
    area: AreaEstimator,
    recommender: RecommendationEngine,
    sessions: SessionStore,
}

impl AnalysisPipeline {
    /// Assemble the pipeline from config. The taxonomy is built once here
    /// and shared by the scorer and predictor.
    pub fn new(config: &AnalysisConfig) -> Self {
        let taxonomy = Arc::new(Taxonomy::from_config(config));
        Self {
            detector: ChangeDetector::new(config.effective_change_threshold()),
            scorer: ImpactScorer::new(Arc::clone(&taxonomy)),
            predictor: TrendPredictor::new(
                Arc::clone(&taxonomy),
                config.effective_min_forecast_horizon(),
                config.effective_max_forecast_horizon(),
            ),
            area: AreaEstimator::new(),
            recommender: RecommendationEngine::from_config(&config.recommender),
            sessions: SessionStore::default(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Analyze one snapshot pair for a session.
    ///
    /// `after_year == before_year` is a valid "no time elapsed" analysis:
    /// the forecast is empty and temporal values are defaults. A reversed
    /// year order fails fast.
    pub fn analyze_pair(
        &self,
        session_id: &str,
        before_probs: &ProbVec,
        after_probs: &ProbVec,
        before_year: i32,
        after_year: i32,
        horizon_years: u32,
    ) -> Result<AnalysisResult, AnalysisError> {
        if after_year < before_year {
            return Err(AnalysisError::InvalidYearRange {
                before: before_year,
                after: after_year,
            });
        }
        let years_passed = (after_year - before_year) as u32;

        let change = self.detector.detect(before_probs, after_probs)?;
        debug!(
            session = session_id,
            before = %change.before_class(),
            after = %change.after_class(),
            significant = change.is_significant,
            magnitude = change.change_magnitude,
            "change detection complete"
        );

        let impact = self.scorer.score(&change);
        let forecast = self.predictor.predict(&change, years_passed, horizon_years)?;

        let (temporal, report) = if years_passed > 0 {
            // Single lock scope: both appends and the derived report see
            // one consistent snapshot of the session log.
            self.sessions.with_tracker(session_id, |tracker| {
                tracker.add_observation(
                    before_year,
                    change.before_class(),
                    change.before.confidence,
                );
                tracker.add_observation(after_year, change.after_class(), change.after.confidence);
                let temporal =
                    tracker.velocity_and_acceleration(years_passed, change.change_magnitude);
                (temporal, tracker.trend_report())
            })
        } else {
            (TemporalAnalysis::default(), TrendReport::insufficient())
        };

        let recommendations =
            if impact.impact_type != ImpactType::Neutral || change.is_cross_class() {
                self.recommender.recommend(&change, &impact, &forecast)
            } else {
                Vec::new()
            };

        let area_changes = self.area.estimate(&change);

        info!(
            session = session_id,
            impact = ?impact.impact_type,
            forecast_confidence = forecast.confidence,
            recommendations = recommendations.len(),
            "analysis complete"
        );

        debug_assert!(impact.impact_score.is_finite());
        debug_assert!(forecast.confidence.is_finite());
        debug_assert!(temporal.velocity.is_finite() && temporal.acceleration.is_finite());

        Ok(AnalysisResult {
            change_info: change,
            environmental_impact: impact,
            future_trends: forecast,
            temporal_analysis: temporal,
            trend_report: report,
            recommendations,
            area_changes,
            years_passed,
        })
    }
}
