//! Environmental impact scoring.

pub mod scorer;

pub use scorer::ImpactScorer;
