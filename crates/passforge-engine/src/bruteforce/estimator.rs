//! Attack-cost estimation from entropy and per-guess hashing cost.

use std::time::Instant;

use passforge_core::config::cost_model::CostModelConfig;
use passforge_core::error::ForgeError;
use passforge_core::result::ForgeResult;
use passforge_core::types::{
    BruteForceCostEstimate, DigestFunction, EntropyReport, HashAlgorithmSpec,
};

use crate::hashing::HashingEngine;
use crate::hashing::engine::compute_digest;

const CALIBRATION_SECRET: &[u8] = b"calibration-secret";
const CALIBRATION_SALT: [u8; 16] = [0x5A; 16];

/// Estimates the cost of guessing a secret under a given algorithm.
///
/// Purely informational: nothing in generation or hashing consults it.
/// Costs are expressed in units of one SHA-256 evaluation.
#[derive(Debug, Clone)]
pub struct BruteForceEstimator {
    cost_model: CostModelConfig,
}

impl BruteForceEstimator {
    /// Creates an estimator from configured cost weights.
    pub fn new(cost_model: CostModelConfig) -> Self {
        Self { cost_model }
    }

    /// Expected attempts `2^bits / 2` and the configured per-guess cost.
    pub fn estimate(
        &self,
        report: &EntropyReport,
        algorithm: &HashAlgorithmSpec,
    ) -> BruteForceCostEstimate {
        self.estimate_with_cost(report, self.per_guess_cost(algorithm))
    }

    /// Same as [`BruteForceEstimator::estimate`] with an explicit,
    /// typically measured, per-guess cost.
    pub fn estimate_with_cost(
        &self,
        report: &EntropyReport,
        per_guess_cost: f64,
    ) -> BruteForceCostEstimate {
        BruteForceCostEstimate::from_bits(report.bits_of_entropy, per_guess_cost)
    }

    /// Configured cost of one guess relative to a single SHA-256.
    pub fn per_guess_cost(&self, algorithm: &HashAlgorithmSpec) -> f64 {
        match *algorithm {
            HashAlgorithmSpec::FastDigest {
                function,
                iterations,
            } => {
                let weight = match function {
                    DigestFunction::Sha256 => self.cost_model.sha256_weight,
                    DigestFunction::Sha512 => self.cost_model.sha512_weight,
                };
                f64::from(iterations) * weight
            }
            HashAlgorithmSpec::AdaptiveKdf {
                time_cost,
                memory_kib,
                ..
            } => {
                // Lanes split the work; they do not reduce it for an attacker.
                f64::from(memory_kib) * f64::from(time_cost) * self.cost_model.kdf_weight_per_kib_pass
            }
        }
    }

    /// Measures the cost of one guess under `algorithm` relative to one
    /// SHA-256 evaluation on this machine.
    ///
    /// Runs `samples` derivations of each, so pick `algorithm` parameters
    /// and `samples` with the wall-clock budget in mind.
    pub fn calibrate(
        &self,
        engine: &HashingEngine,
        algorithm: &HashAlgorithmSpec,
        samples: u32,
    ) -> ForgeResult<f64> {
        if samples == 0 {
            return Err(ForgeError::invalid_parameters(
                "calibration needs at least one sample",
            ));
        }
        engine.check_bounds(algorithm)?;

        let baseline = HashAlgorithmSpec::sha256(1);
        let baseline_nanos = time_per_guess(&baseline, samples)?.max(1.0);
        let algorithm_nanos = time_per_guess(algorithm, samples)?;
        let ratio = (algorithm_nanos / baseline_nanos).max(1.0);

        tracing::debug!(
            algorithm = %algorithm,
            samples,
            baseline_nanos,
            algorithm_nanos,
            ratio,
            "Per-guess cost calibrated"
        );

        Ok(ratio)
    }
}

impl Default for BruteForceEstimator {
    fn default() -> Self {
        Self::new(CostModelConfig::default())
    }
}

fn time_per_guess(algorithm: &HashAlgorithmSpec, samples: u32) -> ForgeResult<f64> {
    let started = Instant::now();
    for _ in 0..samples {
        let digest = compute_digest(algorithm, CALIBRATION_SECRET, &CALIBRATION_SALT)?;
        std::hint::black_box(&digest);
    }
    Ok(started.elapsed().as_nanos() as f64 / f64::from(samples))
}
