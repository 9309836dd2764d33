//! Hash collections used throughout the workspace.
//!
//! FxHash is noticeably faster than SipHash for the small keys (class
//! enums, session ids) this engine hashes, and DoS resistance is not a
//! concern for in-process analysis state.

pub use rustc_hash::{FxHashMap, FxHashSet};
