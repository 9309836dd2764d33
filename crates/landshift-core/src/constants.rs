//! Numeric policy constants shared across the analysis engine.

/// Default confidence threshold both endpoints of a transition must exceed
/// before the detector calls the change significant.
pub const DEFAULT_CHANGE_THRESHOLD: f64 = 0.3;

/// Diagonal prior of the transition matrix: probability mass a class keeps
/// for itself per Markov step before row normalization.
pub const SELF_TRANSITION_PRIOR: f64 = 0.8;

/// Base of the horizon decay applied to the extrapolated annual rate:
/// `DECAY_BASE ^ (horizon_years / DECAY_HORIZON_SCALE)`.
pub const DECAY_BASE: f64 = 0.95;

/// Horizon scale (years) for the decay exponent. Decay acts per decade.
pub const DECAY_HORIZON_SCALE: f64 = 10.0;

/// Forecast entries below this probability are dropped from the output.
pub const FORECAST_PROB_FLOOR: f64 = 0.1;

/// Maximum number of forecast predictions returned.
pub const FORECAST_TOP_K: usize = 5;

/// Environmental score assumed for a class missing from the score table.
pub const DEFAULT_ENV_SCORE: f64 = 0.5;

/// Inclusive bounds on the forecast horizon in years.
pub const MIN_FORECAST_HORIZON: u32 = 1;
pub const MAX_FORECAST_HORIZON: u32 = 20;

/// Nominal area of one analyzed satellite patch in square kilometers.
pub const PATCH_AREA_KM2: f64 = 100.0;

/// Fraction of the before-class area assumed to have transitioned to the
/// after class. Fixed heuristic carried over from the reference area
/// estimator; it has no statistical derivation.
pub const AREA_TRANSFER_FRACTION: f64 = 0.7;

/// Guard added to denominators that may be zero in area percentage math.
pub const AREA_EPSILON: f64 = 1e-8;

/// Acceleration magnitude below which the temporal trend is called stable.
pub const TREND_STABILITY_BAND: f64 = 0.01;

/// Maximum number of recommendation items returned to the caller.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Default timeout for the remote recommendation collaborator.
pub const DEFAULT_COLLABORATOR_TIMEOUT_MS: u64 = 5_000;
