//! Hashing engine configuration.

use serde::{Deserialize, Serialize};

use crate::types::algorithm::HashAlgorithmSpec;
use crate::types::record::MIN_SALT_LEN;

/// Salt size, default algorithm and the cost ceiling for a single hash.
///
/// The ceilings bound how long one `hash` or `verify` call can run, since
/// a running derivation is never interrupted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Bytes of fresh salt drawn per record.
    #[serde(default = "default_salt_length")]
    pub salt_length: usize,
    /// Algorithm used when the caller does not pick one.
    #[serde(default)]
    pub default_algorithm: HashAlgorithmSpec,
    /// Largest accepted KDF time cost.
    #[serde(default = "default_max_time_cost")]
    pub max_time_cost: u32,
    /// Largest accepted KDF memory cost, in KiB.
    #[serde(default = "default_max_memory_kib")]
    pub max_memory_kib: u32,
    /// Largest accepted KDF parallelism.
    #[serde(default = "default_max_parallelism")]
    pub max_parallelism: u32,
    /// Largest accepted fast-digest iteration count.
    #[serde(default = "default_max_digest_iterations")]
    pub max_digest_iterations: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            salt_length: default_salt_length(),
            default_algorithm: HashAlgorithmSpec::default(),
            max_time_cost: default_max_time_cost(),
            max_memory_kib: default_max_memory_kib(),
            max_parallelism: default_max_parallelism(),
            max_digest_iterations: default_max_digest_iterations(),
        }
    }
}

fn default_salt_length() -> usize {
    MIN_SALT_LEN
}

fn default_max_time_cost() -> u32 {
    10
}

fn default_max_memory_kib() -> u32 {
    1024 * 1024
}

fn default_max_parallelism() -> u32 {
    16
}

fn default_max_digest_iterations() -> u32 {
    10_000_000
}
