//! # landshift-core
//!
//! Foundation crate for the Landshift land-cover change-analysis engine.
//! Defines the class taxonomy, all shared types, errors, config, tracing,
//! and constants. The analysis crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod taxonomy;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::AnalysisConfig;
pub use errors::error_code::LandshiftErrorCode;
pub use errors::AnalysisError;
pub use taxonomy::{Taxonomy, TransitionMatrix};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::snapshot::{ClassificationSnapshot, LandClass, ProbVec, NUM_CLASSES};
