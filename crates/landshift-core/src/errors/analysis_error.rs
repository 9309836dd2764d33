//! Errors that can occur while analyzing a snapshot pair.

use super::error_code::{self, LandshiftErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Probability vector length mismatch: expected {expected}, got {actual}")]
    VectorLengthMismatch { expected: usize, actual: usize },

    #[error("Invalid year range: after year {after} precedes before year {before}")]
    InvalidYearRange { before: i32, after: i32 },

    #[error("Forecast horizon {horizon} outside allowed range {min}..={max}")]
    InvalidHorizon { horizon: u32, min: u32, max: u32 },

    #[error("Recommendation collaborator unavailable: {message}")]
    CollaboratorUnavailable { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },
}

impl LandshiftErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::VectorLengthMismatch { .. } => error_code::VECTOR_LENGTH_MISMATCH,
            Self::InvalidYearRange { .. } => error_code::INVALID_YEAR_RANGE,
            Self::InvalidHorizon { .. } => error_code::INVALID_HORIZON,
            Self::CollaboratorUnavailable { .. } => error_code::COLLABORATOR_UNAVAILABLE,
            Self::ConfigError { .. } => error_code::CONFIG_ERROR,
        }
    }
}
