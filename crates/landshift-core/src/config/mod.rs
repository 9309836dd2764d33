//! Engine configuration.

pub mod analysis_config;

pub use analysis_config::{AnalysisConfig, RecommenderConfig, RecommenderMode};
