//! Analysis engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::AnalysisError;
use crate::types::collections::FxHashMap;
use crate::types::snapshot::LandClass;

/// Configuration for the change-analysis engine. Loaded once at startup;
/// unset fields fall back to the built-in constants.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Confidence threshold for significance. Default: 0.3.
    pub change_threshold: Option<f64>,
    /// Diagonal prior of the transition matrix. Default: 0.8.
    pub self_transition_prior: Option<f64>,
    /// Inclusive forecast horizon bounds in years. Defaults: 1 and 20.
    pub min_forecast_horizon: Option<u32>,
    pub max_forecast_horizon: Option<u32>,
    /// Per-class environmental score overrides, merged over the built-in
    /// table.
    #[serde(default)]
    pub environmental_scores: FxHashMap<LandClass, f64>,
    /// Recommendation generator selection.
    #[serde(default)]
    pub recommender: RecommenderConfig,
}

/// Which recommendation generator serves the primary path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecommenderMode {
    /// Deterministic rule table only. No network access.
    #[default]
    RuleBased,
    /// Network-backed text generator with the rule table as fallback.
    Remote,
}

/// Configuration for the recommendation subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecommenderConfig {
    pub mode: RecommenderMode,
    /// Endpoint of the remote generator. Required when mode is `remote`.
    pub endpoint: Option<String>,
    /// Hard timeout for the remote call. Default: 5000ms.
    pub timeout_ms: Option<u64>,
}

impl AnalysisConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, AnalysisError> {
        toml::from_str(text).map_err(|e| AnalysisError::ConfigError {
            message: e.to_string(),
        })
    }

    /// Load a config from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> Result<Self, AnalysisError> {
        let text = std::fs::read_to_string(path).map_err(|e| AnalysisError::ConfigError {
            message: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn effective_change_threshold(&self) -> f64 {
        self.change_threshold
            .unwrap_or(constants::DEFAULT_CHANGE_THRESHOLD)
    }

    pub fn effective_self_transition_prior(&self) -> f64 {
        self.self_transition_prior
            .unwrap_or(constants::SELF_TRANSITION_PRIOR)
    }

    pub fn effective_min_forecast_horizon(&self) -> u32 {
        self.min_forecast_horizon
            .unwrap_or(constants::MIN_FORECAST_HORIZON)
    }

    pub fn effective_max_forecast_horizon(&self) -> u32 {
        self.max_forecast_horizon
            .unwrap_or(constants::MAX_FORECAST_HORIZON)
    }
}

impl RecommenderConfig {
    pub fn effective_timeout_ms(&self) -> u64 {
        self.timeout_ms
            .unwrap_or(constants::DEFAULT_COLLABORATOR_TIMEOUT_MS)
    }
}
