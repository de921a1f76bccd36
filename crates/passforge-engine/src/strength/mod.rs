//! Strength estimation.

pub mod estimator;

pub use estimator::StrengthEstimator;
