//! Per-guess cost weights for brute-force estimation.

use serde::{Deserialize, Serialize};

/// Relative cost of one guess, where one SHA-256 evaluation costs 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostModelConfig {
    /// Weight of one SHA-256 application.
    #[serde(default = "default_sha256_weight")]
    pub sha256_weight: f64,
    /// Weight of one SHA-512 application.
    #[serde(default = "default_sha512_weight")]
    pub sha512_weight: f64,
    /// Weight of one KiB of memory filled once by an argon2-family KDF.
    #[serde(default = "default_kdf_weight")]
    pub kdf_weight_per_kib_pass: f64,
}

impl Default for CostModelConfig {
    fn default() -> Self {
        Self {
            sha256_weight: default_sha256_weight(),
            sha512_weight: default_sha512_weight(),
            kdf_weight_per_kib_pass: default_kdf_weight(),
        }
    }
}

fn default_sha256_weight() -> f64 {
    1.0
}

fn default_sha512_weight() -> f64 {
    1.6
}

fn default_kdf_weight() -> f64 {
    1.0
}
