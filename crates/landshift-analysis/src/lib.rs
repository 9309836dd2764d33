//! # landshift-analysis
//!
//! The Landshift analysis engine: compares two land-cover classification
//! snapshots, scores the environmental significance of the transition,
//! projects the class distribution forward with a Markov chain, tracks
//! velocity/acceleration across a growing time series, and produces
//! actionable recommendations.
//!
//! Everything except the time-series tracker is a pure function of
//! immutable inputs and safe to call concurrently.

pub mod area;
pub mod detector;
pub mod forecast;
pub mod impact;
pub mod pipeline;
pub mod recommend;
pub mod temporal;

pub use detector::ChangeDetector;
pub use forecast::TrendPredictor;
pub use impact::ImpactScorer;
pub use pipeline::{AnalysisPipeline, AnalysisResult};
pub use recommend::{RecommendationEngine, RecommendationGenerator, RecommendationRequest};
pub use temporal::{SessionStore, TimeSeriesTracker};
