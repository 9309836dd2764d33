//! Network-backed recommendation generator.
//!
//! POSTs the structured request to an external text-generation service and
//! expects a JSON list of short, marker-prefixed strings back. Every
//! transport, status, or shape failure maps to `CollaboratorUnavailable`
//! so the engine can fall back locally; the hard timeout keeps a slow
//! collaborator from blocking an analysis.

use std::time::Duration;

use serde::Deserialize;

use landshift_core::errors::AnalysisError;

use super::generator::{RecommendationGenerator, RecommendationRequest};

/// Raw item cap applied before the engine's own dedup/cap pass.
const MAX_REMOTE_ITEMS: usize = 12;

/// The urgency markers a returned line must start with to be kept.
const URGENCY_MARKERS: [&str; 3] = ["🚨", "🛡️", "💡"];

#[derive(Debug, Deserialize)]
struct RemoteResponse {
    recommendations: Vec<String>,
}

/// Blocking HTTP client for the recommendation collaborator.
pub struct RemoteGenerator {
    agent: ureq::Agent,
    endpoint: String,
}

impl RemoteGenerator {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout(timeout)
            .build();
        Self { agent, endpoint }
    }

    fn unavailable(message: impl Into<String>) -> AnalysisError {
        AnalysisError::CollaboratorUnavailable {
            message: message.into(),
        }
    }
}

impl RecommendationGenerator for RemoteGenerator {
    fn generate(&self, request: &RecommendationRequest) -> Result<Vec<String>, AnalysisError> {
        let body = serde_json::to_value(request)
            .map_err(|e| Self::unavailable(format!("request encoding failed: {e}")))?;

        let response = self
            .agent
            .post(&self.endpoint)
            .send_json(body)
            .map_err(|e| Self::unavailable(e.to_string()))?;

        let parsed: RemoteResponse = response
            .into_json()
            .map_err(|e| Self::unavailable(format!("malformed response: {e}")))?;

        let items: Vec<String> = parsed
            .recommendations
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| {
                !line.is_empty() && URGENCY_MARKERS.iter().any(|m| line.starts_with(m))
            })
            .take(MAX_REMOTE_ITEMS)
            .collect();

        if items.is_empty() {
            return Err(Self::unavailable("collaborator returned no usable items"));
        }
        Ok(items)
    }
}
