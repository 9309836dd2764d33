//! Trend predictor: Markov stepping, decay, filtering, and confidence.

use std::sync::Arc;

use landshift_analysis::{ChangeDetector, TrendPredictor};
use landshift_core::constants::{MAX_FORECAST_HORIZON, MIN_FORECAST_HORIZON};
use landshift_core::taxonomy::Taxonomy;
use landshift_core::types::change::ChangeRecord;
use landshift_core::types::forecast::FutureImpactLabel;
use landshift_core::types::snapshot::{LandClass, ProbVec, NUM_CLASSES};
use landshift_core::AnalysisError;

fn one_hot(class: LandClass, confidence: f64) -> ProbVec {
    let rest = (1.0 - confidence) / (NUM_CLASSES - 1) as f64;
    let mut probs = ProbVec::from_elem(rest, NUM_CLASSES);
    probs[class.index()] = confidence;
    probs
}

fn forest_to_cropland() -> ChangeRecord {
    ChangeDetector::default()
        .detect(
            &one_hot(LandClass::Forest, 0.95),
            &one_hot(LandClass::AnnualCrop, 0.88),
        )
        .unwrap()
}

fn predictor() -> TrendPredictor {
    TrendPredictor::new(
        Arc::new(Taxonomy::builtin()),
        MIN_FORECAST_HORIZON,
        MAX_FORECAST_HORIZON,
    )
}

#[test]
fn slow_change_yields_low_confidence() {
    let forecast = predictor().predict(&forest_to_cropland(), 10, 5).unwrap();
    // annual rate = 0.07 / 10; confidence = min(1, rate * 2) = 0.014.
    assert!(
        (forecast.confidence - 0.014).abs() < 1e-9,
        "expected 0.014, got {}",
        forecast.confidence
    );
    assert!(!forecast.predictions.is_empty());
}

#[test]
fn confidence_saturates_at_one() {
    // 0.55 magnitude over 1 year: rate * 2 > 1, clamped.
    let change = ChangeDetector::default()
        .detect(
            &one_hot(LandClass::Forest, 0.95),
            &one_hot(LandClass::Industrial, 0.4),
        )
        .unwrap();
    let forecast = predictor().predict(&change, 1, 10).unwrap();
    assert_eq!(forecast.confidence, 1.0);
}

#[test]
fn insignificant_change_yields_empty_forecast() {
    let change = ChangeDetector::default()
        .detect(
            &one_hot(LandClass::Forest, 0.9),
            &one_hot(LandClass::Forest, 0.8),
        )
        .unwrap();
    let forecast = predictor().predict(&change, 10, 5).unwrap();
    assert!(forecast.predictions.is_empty());
    assert_eq!(forecast.confidence, 0.0);
}

#[test]
fn zero_years_elapsed_yields_empty_forecast_not_error() {
    let forecast = predictor().predict(&forest_to_cropland(), 0, 5).unwrap();
    assert!(forecast.predictions.is_empty());
    assert_eq!(forecast.confidence, 0.0);
}

#[test]
fn predictions_are_sorted_filtered_and_capped() {
    let forecast = predictor().predict(&forest_to_cropland(), 10, 20).unwrap();

    assert!(forecast.predictions.len() <= 5);
    for pred in &forecast.predictions {
        assert!(pred.probability > 0.1, "below the filter floor");
        assert!(pred.probability <= 1.0);
    }
    for pair in forecast.predictions.windows(2) {
        assert!(pair[0].probability >= pair[1].probability, "not sorted");
    }
    // Kept entries are a subset of a distribution.
    let total: f64 = forecast.predictions.iter().map(|p| p.probability).sum();
    assert!(total <= 1.0 + 1e-9);
}

#[test]
fn after_class_dominates_short_horizons() {
    let forecast = predictor().predict(&forest_to_cropland(), 10, 3).unwrap();
    let top = &forecast.predictions[0];
    assert_eq!(top.land_type, LandClass::AnnualCrop);
    // Staying AnnualCrop is score-stable relative to itself.
    assert_eq!(top.environmental_impact, FutureImpactLabel::Stable);
}

#[test]
fn impact_labels_follow_taxonomy_score_bands() {
    // From AnnualCrop (0.5): Forest (1.0) is > +0.2 away, Industrial
    // (0.1) is < -0.2 away, Pasture (0.6) is a minor improvement.
    let forecast = predictor().predict(&forest_to_cropland(), 10, 20).unwrap();
    for pred in &forecast.predictions {
        let expected = match pred.land_type {
            LandClass::Forest => FutureImpactLabel::SignificantImprovement,
            LandClass::Industrial | LandClass::Highway => FutureImpactLabel::SignificantDegradation,
            LandClass::AnnualCrop => FutureImpactLabel::Stable,
            LandClass::Pasture => FutureImpactLabel::MinorImprovement,
            _ => continue,
        };
        assert_eq!(
            pred.environmental_impact, expected,
            "label mismatch for {}",
            pred.land_type
        );
    }
}

#[test]
fn out_of_range_horizon_is_rejected() {
    let p = predictor();
    let change = forest_to_cropland();
    assert!(matches!(
        p.predict(&change, 10, 0),
        Err(AnalysisError::InvalidHorizon { horizon: 0, .. })
    ));
    assert!(matches!(
        p.predict(&change, 10, 21),
        Err(AnalysisError::InvalidHorizon { horizon: 21, .. })
    ));
}
