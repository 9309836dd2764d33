//! Accumulates dated observations and computes velocity, acceleration,
//! and trend summaries. The only stateful component in the engine.

use chrono::Utc;
use statrs::statistics::Statistics;

use landshift_core::constants::TREND_STABILITY_BAND;
use landshift_core::types::collections::FxHashMap;
use landshift_core::types::snapshot::LandClass;
use landshift_core::types::temporal::{
    ConfidenceTrend, TemporalAnalysis, TemporalStability, TemporalTrend, TimeSeriesObservation,
    TrendReport, TrendSummary,
};

/// Per-session, append-only observation log with derived temporal
/// statistics. Wrap in a lock when shared across threads; a report must
/// see a consistent snapshot of the log.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesTracker {
    observations: Vec<TimeSeriesObservation>,
}

impl TimeSeriesTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observation. No deduplication; the log is insertion-ordered.
    pub fn add_observation(&mut self, year: i32, land_type: LandClass, confidence: f64) {
        self.observations.push(TimeSeriesObservation {
            year,
            land_type,
            confidence,
            recorded_at: Utc::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[TimeSeriesObservation] {
        &self.observations
    }

    /// Velocity of the observed change plus an acceleration estimate from
    /// the three most recent observations (by year).
    ///
    /// Velocity needs `years_elapsed > 0`; otherwise both values are 0.
    /// Acceleration needs ≥3 observations and strictly positive time
    /// deltas between them; otherwise it stays 0.
    pub fn velocity_and_acceleration(
        &self,
        years_elapsed: u32,
        change_magnitude: f64,
    ) -> TemporalAnalysis {
        if years_elapsed == 0 {
            return TemporalAnalysis::default();
        }

        let velocity = change_magnitude / years_elapsed as f64;

        let mut acceleration = 0.0;
        if self.observations.len() >= 3 {
            let mut by_year: Vec<&TimeSeriesObservation> = self.observations.iter().collect();
            by_year.sort_by_key(|obs| obs.year);
            let recent = &by_year[by_year.len() - 3..];

            let dt1 = (recent[1].year - recent[0].year) as f64;
            let dt2 = (recent[2].year - recent[1].year) as f64;
            if dt1 > 0.0 && dt2 > 0.0 {
                let v1 = (recent[1].confidence - recent[0].confidence) / dt1;
                let v2 = (recent[2].confidence - recent[1].confidence) / dt2;
                acceleration = (v2 - v1) / ((dt1 + dt2) / 2.0);
            }
        }

        let trend = if acceleration > TREND_STABILITY_BAND {
            TemporalTrend::Accelerating
        } else if acceleration < -TREND_STABILITY_BAND {
            TemporalTrend::Decelerating
        } else {
            TemporalTrend::Stable
        };

        TemporalAnalysis {
            velocity,
            acceleration,
            trend,
        }
    }

    /// Aggregate statistics over the full log. With fewer than 2
    /// observations this is the defined insufficient-data result.
    pub fn trend_report(&self) -> TrendReport {
        if self.observations.len() < 2 {
            return TrendReport::insufficient();
        }

        let min_year = self.observations.iter().map(|o| o.year).min().unwrap_or(0);
        let max_year = self.observations.iter().map(|o| o.year).max().unwrap_or(0);

        let average_confidence = self
            .observations
            .iter()
            .map(|o| o.confidence)
            .collect::<Vec<f64>>()
            .mean();

        let first = &self.observations[0];
        let last = &self.observations[self.observations.len() - 1];
        let confidence_trend = if last.confidence > first.confidence {
            ConfidenceTrend::Increasing
        } else {
            ConfidenceTrend::Decreasing
        };

        // Most frequent class; ties break toward the first-seen class.
        let mut counts: FxHashMap<LandClass, usize> = FxHashMap::default();
        let mut first_seen: Vec<LandClass> = Vec::new();
        for obs in &self.observations {
            if !counts.contains_key(&obs.land_type) {
                first_seen.push(obs.land_type);
            }
            *counts.entry(obs.land_type).or_insert(0) += 1;
        }
        let mut dominant_land_type = first.land_type;
        let mut dominant_count = 0;
        for &class in &first_seen {
            // Strict `>` keeps the first-seen class on ties.
            if counts[&class] > dominant_count {
                dominant_count = counts[&class];
                dominant_land_type = class;
            }
        }

        let land_type_diversity = counts.len();
        let temporal_stability = if land_type_diversity <= 2 {
            TemporalStability::Stable
        } else {
            TemporalStability::Dynamic
        };

        TrendReport::Success(TrendSummary {
            date_range_years: max_year - min_year,
            total_observations: self.observations.len(),
            average_confidence,
            confidence_trend,
            dominant_land_type,
            land_type_diversity,
            temporal_stability,
        })
    }
}
