//! Time-series tracking and session-scoped storage.

pub mod store;
pub mod tracker;

pub use store::SessionStore;
pub use tracker::TimeSeriesTracker;
