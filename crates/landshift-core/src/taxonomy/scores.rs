//! Per-class environmental health scores.
//!
//! 1.0 is pristine natural cover, 0.0 fully built. Values are the
//! reference table used by the impact scorer and trend labeling.

use crate::types::collections::FxHashMap;
use crate::types::snapshot::LandClass;

/// The built-in score table.
pub fn builtin_scores() -> FxHashMap<LandClass, f64> {
    let mut scores = FxHashMap::default();
    scores.insert(LandClass::Forest, 1.0);
    scores.insert(LandClass::River, 0.9);
    scores.insert(LandClass::SeaLake, 0.8);
    scores.insert(LandClass::HerbaceousVegetation, 0.7);
    scores.insert(LandClass::Pasture, 0.6);
    scores.insert(LandClass::AnnualCrop, 0.5);
    scores.insert(LandClass::PermanentCrop, 0.5);
    scores.insert(LandClass::Residential, 0.3);
    scores.insert(LandClass::Highway, 0.2);
    scores.insert(LandClass::Industrial, 0.1);
    scores
}
