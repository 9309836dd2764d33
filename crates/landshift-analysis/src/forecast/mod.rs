//! Markov-chain trend forecasting.

pub mod markov;

pub use markov::TrendPredictor;
