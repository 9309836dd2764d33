//! Land-cover classes and per-image classification snapshots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of classes in the reference land-cover taxonomy.
pub const NUM_CLASSES: usize = 10;

/// Probability vector over the class taxonomy, in taxonomy order.
/// Fixed-size in practice; SmallVec keeps it off the heap.
pub type ProbVec = SmallVec<[f64; NUM_CLASSES]>;

/// The reference land-cover taxonomy, in the fixed vector order produced
/// by the upstream classifier. The discriminant IS the vector index, so
/// reordering variants is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandClass {
    AnnualCrop,
    Forest,
    HerbaceousVegetation,
    Highway,
    Industrial,
    Pasture,
    PermanentCrop,
    Residential,
    River,
    SeaLake,
}

impl LandClass {
    /// All classes in taxonomy (vector-index) order.
    pub const ALL: [LandClass; NUM_CLASSES] = [
        LandClass::AnnualCrop,
        LandClass::Forest,
        LandClass::HerbaceousVegetation,
        LandClass::Highway,
        LandClass::Industrial,
        LandClass::Pasture,
        LandClass::PermanentCrop,
        LandClass::Residential,
        LandClass::River,
        LandClass::SeaLake,
    ];

    /// Position of this class in the probability vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Class at a given vector index, if in range.
    pub fn from_index(idx: usize) -> Option<LandClass> {
        Self::ALL.get(idx).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LandClass::AnnualCrop => "AnnualCrop",
            LandClass::Forest => "Forest",
            LandClass::HerbaceousVegetation => "HerbaceousVegetation",
            LandClass::Highway => "Highway",
            LandClass::Industrial => "Industrial",
            LandClass::Pasture => "Pasture",
            LandClass::PermanentCrop => "PermanentCrop",
            LandClass::Residential => "Residential",
            LandClass::River => "River",
            LandClass::SeaLake => "SeaLake",
        }
    }

    /// Whether this class represents open water.
    pub fn is_water(self) -> bool {
        matches!(self, LandClass::River | LandClass::SeaLake)
    }
}

impl std::fmt::Display for LandClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classifier output for one image: the argmax class, its confidence,
/// and the full probability vector. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSnapshot {
    pub predicted: LandClass,
    pub confidence: f64,
    pub probabilities: ProbVec,
}

impl ClassificationSnapshot {
    /// Build a snapshot from a raw probability vector by taking the argmax.
    /// Ties break toward the lowest class index.
    pub fn from_probabilities(probabilities: ProbVec) -> Option<Self> {
        let (idx, &confidence) = probabilities
            .iter()
            .enumerate()
            // `>` keeps the earliest maximum on ties
            .fold(None, |best: Option<(usize, &f64)>, (i, p)| match best {
                Some((_, bp)) if p > bp => Some((i, p)),
                None => Some((i, p)),
                keep => keep,
            })?;
        let predicted = LandClass::from_index(idx)?;
        Some(Self {
            predicted,
            confidence,
            probabilities,
        })
    }
}
