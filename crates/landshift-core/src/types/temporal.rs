//! Time-series observations and the summaries derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::snapshot::LandClass;

/// One dated classification appended to a session's observation log.
/// Append-only; never mutated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesObservation {
    pub year: i32,
    pub land_type: LandClass,
    pub confidence: f64,
    /// Wall-clock append time. Metadata only; never used in math.
    pub recorded_at: DateTime<Utc>,
}

/// Direction of change velocity across the recent observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalTrend {
    Accelerating,
    Decelerating,
    Stable,
}

/// Velocity/acceleration summary for the observed change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    /// Change magnitude per year.
    pub velocity: f64,
    /// Second finite difference of confidence over the 3 most recent
    /// observations; 0 when history is too short.
    pub acceleration: f64,
    pub trend: TemporalTrend,
}

impl Default for TemporalAnalysis {
    fn default() -> Self {
        Self {
            velocity: 0.0,
            acceleration: 0.0,
            trend: TemporalTrend::Stable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTrend {
    Increasing,
    Decreasing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalStability {
    Stable,
    Dynamic,
}

/// Aggregate statistics over a session's full observation log.
/// Recomputed from the log on each request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendReport {
    /// Fewer than 2 observations: a defined "no answer yet", not an error.
    InsufficientData { message: String },
    Success(TrendSummary),
}

impl TrendReport {
    pub fn insufficient() -> Self {
        TrendReport::InsufficientData {
            message: "Need at least 2 observations for trend analysis".to_string(),
        }
    }

    pub fn summary(&self) -> Option<&TrendSummary> {
        match self {
            TrendReport::Success(s) => Some(s),
            TrendReport::InsufficientData { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub date_range_years: i32,
    pub total_observations: usize,
    pub average_confidence: f64,
    pub confidence_trend: ConfidenceTrend,
    pub dominant_land_type: LandClass,
    /// Count of distinct classes seen; always ≥ 1.
    pub land_type_diversity: usize,
    pub temporal_stability: TemporalStability,
}
