//! Shared data model for the analysis engine.

pub mod area;
pub mod change;
pub mod collections;
pub mod forecast;
pub mod impact;
pub mod snapshot;
pub mod temporal;
