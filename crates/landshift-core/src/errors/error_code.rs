//! Stable error codes surfaced alongside error messages.
//!
//! Codes are part of the external contract: surrounding layers match on
//! them, so existing codes must never be renamed.

pub const VECTOR_LENGTH_MISMATCH: &str = "LS_VECTOR_LENGTH_MISMATCH";
pub const INVALID_YEAR_RANGE: &str = "LS_INVALID_YEAR_RANGE";
pub const INVALID_HORIZON: &str = "LS_INVALID_HORIZON";
pub const COLLABORATOR_UNAVAILABLE: &str = "LS_COLLABORATOR_UNAVAILABLE";
pub const CONFIG_ERROR: &str = "LS_CONFIG_ERROR";

/// Maps an error to its stable code.
pub trait LandshiftErrorCode {
    fn error_code(&self) -> &'static str;
}
