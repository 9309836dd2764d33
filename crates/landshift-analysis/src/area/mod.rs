//! Area-change estimation.

pub mod estimator;

pub use estimator::AreaEstimator;
