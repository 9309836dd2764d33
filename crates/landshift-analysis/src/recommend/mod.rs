//! Recommendation generation: a capability interface with a network-backed
//! implementation and a deterministic rule-based fallback.

pub mod engine;
pub mod generator;
pub mod remote;

pub use engine::RecommendationEngine;
pub use generator::{RecommendationGenerator, RecommendationRequest, RuleBasedGenerator};
pub use remote::RemoteGenerator;
