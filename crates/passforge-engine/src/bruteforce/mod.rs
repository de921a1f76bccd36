//! Brute-force cost estimation.

pub mod estimator;

pub use estimator::BruteForceEstimator;
