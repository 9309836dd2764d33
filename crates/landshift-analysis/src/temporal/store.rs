//! Session-scoped tracker storage.
//!
//! Each analysis session owns one observation log, keyed by session id in
//! a bounded in-memory cache so many concurrent sessions can coexist and
//! idle sessions age out. The per-session mutex serializes appends against
//! report generation: a reader always sees a consistent snapshot of the
//! log, never a partial append.

use std::sync::{Arc, Mutex};

use moka::sync::Cache;

use super::tracker::TimeSeriesTracker;

/// Default maximum number of live sessions.
const DEFAULT_CAPACITY: u64 = 10_000;

/// In-memory session store for time-series trackers.
pub struct SessionStore {
    inner: Cache<String, Arc<Mutex<TimeSeriesTracker>>>,
}

impl SessionStore {
    /// Create a store holding at most `capacity` sessions.
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
        }
    }

    /// Get the tracker for a session, creating it on first use.
    pub fn tracker(&self, session_id: &str) -> Arc<Mutex<TimeSeriesTracker>> {
        self.inner
            .get_with(session_id.to_string(), || {
                Arc::new(Mutex::new(TimeSeriesTracker::new()))
            })
    }

    /// Run `f` with exclusive access to a session's tracker.
    pub fn with_tracker<R>(&self, session_id: &str, f: impl FnOnce(&mut TimeSeriesTracker) -> R) -> R {
        let tracker = self.tracker(session_id);
        let mut guard = tracker.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> u64 {
        // `entry_count` is eventually consistent; flush pending internal
        // maintenance so freshly inserted sessions are counted.
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    /// Drop a session's history.
    pub fn invalidate(&self, session_id: &str) {
        self.inner.invalidate(session_id);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
