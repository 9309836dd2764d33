//! Error types for the analysis engine.

pub mod analysis_error;
pub mod error_code;

pub use analysis_error::AnalysisError;
