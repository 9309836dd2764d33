//! Change detection between snapshot pairs.

pub mod change;

pub use change::ChangeDetector;
