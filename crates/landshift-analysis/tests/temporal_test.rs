//! Time-series tracker: velocity, finite-difference acceleration, trend
//! reports, and the session store's isolation guarantees.

use landshift_analysis::{SessionStore, TimeSeriesTracker};
use landshift_core::types::snapshot::LandClass;
use landshift_core::types::temporal::{
    ConfidenceTrend, TemporalStability, TemporalTrend, TrendReport,
};

#[test]
fn velocity_is_magnitude_per_year() {
    let tracker = TimeSeriesTracker::new();
    let analysis = tracker.velocity_and_acceleration(10, 0.07);
    assert!((analysis.velocity - 0.007).abs() < 1e-12);
    assert_eq!(analysis.acceleration, 0.0);
    assert_eq!(analysis.trend, TemporalTrend::Stable);
}

#[test]
fn zero_years_elapsed_zeroes_both_values() {
    let mut tracker = TimeSeriesTracker::new();
    for (year, conf) in [(2000, 0.5), (2005, 0.7), (2010, 0.9)] {
        tracker.add_observation(year, LandClass::Forest, conf);
    }
    let analysis = tracker.velocity_and_acceleration(0, 0.5);
    assert_eq!(analysis.velocity, 0.0);
    assert_eq!(analysis.acceleration, 0.0);
    assert_eq!(analysis.trend, TemporalTrend::Stable);
}

#[test]
fn acceleration_needs_three_observations() {
    let mut tracker = TimeSeriesTracker::new();
    tracker.add_observation(2000, LandClass::Forest, 0.5);
    tracker.add_observation(2010, LandClass::AnnualCrop, 0.9);
    let analysis = tracker.velocity_and_acceleration(10, 0.4);
    assert_eq!(analysis.acceleration, 0.0);
}

#[test]
fn decade_spaced_observations_give_small_positive_acceleration() {
    let mut tracker = TimeSeriesTracker::new();
    tracker.add_observation(2000, LandClass::Forest, 0.5);
    tracker.add_observation(2010, LandClass::Forest, 0.6);
    tracker.add_observation(2020, LandClass::AnnualCrop, 0.9);

    let analysis = tracker.velocity_and_acceleration(20, 0.4);
    // v1 = 0.01/yr, v2 = 0.03/yr → accel = 0.02 / 10 = 0.002.
    assert!(analysis.acceleration > 0.0);
    assert!((analysis.acceleration - 0.002).abs() < 1e-12);
    // 0.002 sits inside the ±0.01 stability band.
    assert_eq!(analysis.trend, TemporalTrend::Stable);
}

#[test]
fn rapid_confidence_growth_is_accelerating() {
    let mut tracker = TimeSeriesTracker::new();
    tracker.add_observation(2018, LandClass::Forest, 0.5);
    tracker.add_observation(2020, LandClass::Forest, 0.6);
    tracker.add_observation(2022, LandClass::AnnualCrop, 0.9);

    let analysis = tracker.velocity_and_acceleration(4, 0.4);
    // v1 = 0.05/yr, v2 = 0.15/yr → accel = 0.1 / 2 = 0.05 > 0.01.
    assert!(analysis.acceleration > 0.01);
    assert_eq!(analysis.trend, TemporalTrend::Accelerating);
}

#[test]
fn confidence_decline_is_decelerating() {
    let mut tracker = TimeSeriesTracker::new();
    tracker.add_observation(2018, LandClass::Forest, 0.9);
    tracker.add_observation(2020, LandClass::Forest, 0.8);
    tracker.add_observation(2022, LandClass::Forest, 0.4);

    let analysis = tracker.velocity_and_acceleration(4, 0.2);
    assert!(analysis.acceleration < -0.01);
    assert_eq!(analysis.trend, TemporalTrend::Decelerating);
}

#[test]
fn zero_time_delta_skips_acceleration() {
    let mut tracker = TimeSeriesTracker::new();
    tracker.add_observation(2020, LandClass::Forest, 0.5);
    tracker.add_observation(2020, LandClass::Forest, 0.7);
    tracker.add_observation(2022, LandClass::AnnualCrop, 0.9);

    let analysis = tracker.velocity_and_acceleration(2, 0.4);
    assert_eq!(analysis.acceleration, 0.0, "zero dt must not divide");
}

#[test]
fn trend_report_needs_two_observations() {
    let mut tracker = TimeSeriesTracker::new();
    assert!(matches!(
        tracker.trend_report(),
        TrendReport::InsufficientData { .. }
    ));

    tracker.add_observation(2020, LandClass::Forest, 0.9);
    assert!(matches!(
        tracker.trend_report(),
        TrendReport::InsufficientData { .. }
    ));

    tracker.add_observation(2022, LandClass::Forest, 0.8);
    assert!(matches!(tracker.trend_report(), TrendReport::Success(_)));
}

#[test]
fn trend_report_statistics() {
    let mut tracker = TimeSeriesTracker::new();
    tracker.add_observation(2000, LandClass::Forest, 0.9);
    tracker.add_observation(2010, LandClass::Forest, 0.8);
    tracker.add_observation(2020, LandClass::AnnualCrop, 0.7);

    let report = tracker.trend_report();
    let summary = report.summary().expect("3 observations is enough");
    assert_eq!(summary.date_range_years, 20);
    assert_eq!(summary.total_observations, 3);
    assert!((summary.average_confidence - 0.8).abs() < 1e-12);
    assert_eq!(summary.confidence_trend, ConfidenceTrend::Decreasing);
    assert_eq!(summary.dominant_land_type, LandClass::Forest);
    assert_eq!(summary.land_type_diversity, 2);
    assert_eq!(summary.temporal_stability, TemporalStability::Stable);
}

#[test]
fn dominant_class_tie_breaks_to_first_seen() {
    let mut tracker = TimeSeriesTracker::new();
    tracker.add_observation(2000, LandClass::Pasture, 0.8);
    tracker.add_observation(2010, LandClass::Forest, 0.8);
    tracker.add_observation(2020, LandClass::Forest, 0.8);
    tracker.add_observation(2030, LandClass::Pasture, 0.9);

    let report = tracker.trend_report();
    let summary = report.summary().unwrap();
    assert_eq!(summary.dominant_land_type, LandClass::Pasture);
    assert_eq!(summary.confidence_trend, ConfidenceTrend::Increasing);
}

#[test]
fn three_or_more_classes_is_dynamic() {
    let mut tracker = TimeSeriesTracker::new();
    tracker.add_observation(2000, LandClass::Forest, 0.9);
    tracker.add_observation(2010, LandClass::Pasture, 0.8);
    tracker.add_observation(2020, LandClass::Residential, 0.7);

    let summary = tracker.trend_report().summary().cloned().unwrap();
    assert_eq!(summary.land_type_diversity, 3);
    assert_eq!(summary.temporal_stability, TemporalStability::Dynamic);
}

// ── Session store ──────────────────────────────────────────────────────────

#[test]
fn sessions_are_isolated() {
    let store = SessionStore::default();

    store.with_tracker("alpha", |t| {
        t.add_observation(2000, LandClass::Forest, 0.9);
        t.add_observation(2010, LandClass::AnnualCrop, 0.8);
    });
    store.with_tracker("beta", |t| {
        t.add_observation(1990, LandClass::SeaLake, 0.95);
    });

    assert_eq!(store.session_count(), 2);
    assert_eq!(store.with_tracker("alpha", |t| t.len()), 2);
    assert_eq!(store.with_tracker("beta", |t| t.len()), 1);

    store.invalidate("alpha");
    // A fresh tracker appears on next access.
    assert_eq!(store.with_tracker("alpha", |t| t.len()), 0);
}

#[test]
fn concurrent_appends_are_serialized() {
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(SessionStore::default());
    let mut handles = Vec::new();
    for i in 0..8 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for j in 0..50 {
                store.with_tracker("shared", |t| {
                    t.add_observation(2000 + i, LandClass::Forest, 0.5 + (j as f64) * 0.001);
                });
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.with_tracker("shared", |t| t.len()), 400);
    // A report over the shared log is well-formed.
    let report = store.with_tracker("shared", |t| t.trend_report());
    let summary = report.summary().unwrap();
    assert_eq!(summary.total_observations, 400);
    assert!(summary.land_type_diversity >= 1);
}
