//! Salted hashing and timing-safe verification.

use std::sync::Arc;

use zeroize::Zeroizing;

use passforge_core::config::hashing::HashingConfig;
use passforge_core::error::ForgeError;
use passforge_core::result::ForgeResult;
use passforge_core::traits::RandomSource;
use passforge_core::types::{FORMAT_VERSION, HashAlgorithmSpec, HashRecord, MIN_SALT_LEN};

use super::compare::constant_time_eq;
use super::digest::iterated_digest;
use super::kdf::{self, KdfCost};

/// Smallest argon2 memory cost per lane, in KiB.
const ARGON2_MIN_KIB_PER_LANE: u32 = 8;

/// Produces and verifies [`HashRecord`]s.
///
/// Stateless apart from its configuration and random source; safe to
/// share across threads. Plaintext secrets live only on the caller's
/// stack and in zeroed-on-drop buffers for the duration of a call.
#[derive(Clone)]
pub struct HashingEngine {
    random: Arc<dyn RandomSource>,
    config: HashingConfig,
}

impl HashingEngine {
    /// Creates an engine drawing salts from `random`.
    pub fn new(random: Arc<dyn RandomSource>, config: HashingConfig) -> Self {
        Self { random, config }
    }

    /// The configured default algorithm.
    pub fn default_algorithm(&self) -> &HashAlgorithmSpec {
        &self.config.default_algorithm
    }

    /// Hashes `secret` under a fresh salt.
    ///
    /// Parameters are checked against the configured cost bounds before
    /// any work starts; a derivation is never interrupted once running.
    pub fn hash(&self, secret: &str, algorithm: &HashAlgorithmSpec) -> ForgeResult<HashRecord> {
        self.check_bounds(algorithm)?;

        if algorithm.is_discouraged() {
            tracing::warn!(
                algorithm = algorithm.name(),
                "Producing a new record with a fast digest; prefer an adaptive KDF"
            );
        }

        let salt_length = self.config.salt_length.max(MIN_SALT_LEN);
        let salt = self.random.next_bytes(salt_length)?;
        let digest = compute_digest(algorithm, secret.as_bytes(), &salt)?;

        tracing::debug!(algorithm = %algorithm, salt_length, "Secret hashed");

        Ok(HashRecord::new(*algorithm, salt, digest.to_vec()))
    }

    /// Hashes `secret` with the configured default algorithm.
    pub fn hash_default(&self, secret: &str) -> ForgeResult<HashRecord> {
        let algorithm = self.config.default_algorithm;
        self.hash(secret, &algorithm)
    }

    /// Recomputes the digest of `secret` with the record's algorithm and
    /// salt and compares it in constant time.
    ///
    /// A mismatch is `Ok(false)`, never an error, and is logged exactly
    /// like a match.
    pub fn verify(&self, secret: &str, record: &HashRecord) -> ForgeResult<bool> {
        if record.format_version() != FORMAT_VERSION {
            return Err(ForgeError::unsupported_algorithm(format!(
                "record format version {} is not supported",
                record.format_version()
            )));
        }
        check_shape(record)?;
        self.check_bounds(record.algorithm())?;

        let candidate = compute_digest(record.algorithm(), secret.as_bytes(), record.salt())?;
        let matches = constant_time_eq(&candidate, record.digest());

        tracing::debug!(algorithm = %record.algorithm(), "Record verified");

        Ok(matches)
    }

    /// Whether a record should be re-hashed with `preferred` at the next
    /// successful verification.
    pub fn needs_rehash(&self, record: &HashRecord, preferred: &HashAlgorithmSpec) -> bool {
        record.format_version() != FORMAT_VERSION
            || record.algorithm() != preferred
            || record.algorithm().is_discouraged()
            || record.salt().len() < self.config.salt_length
    }

    /// Rejects parameters outside the primitive's limits or the configured
    /// ceilings.
    pub fn check_bounds(&self, algorithm: &HashAlgorithmSpec) -> ForgeResult<()> {
        match *algorithm {
            HashAlgorithmSpec::FastDigest { iterations, .. } => {
                if iterations == 0 {
                    return Err(ForgeError::invalid_parameters(
                        "digest iterations must be at least 1",
                    ));
                }
                if iterations > self.config.max_digest_iterations {
                    return Err(ForgeError::invalid_parameters(format!(
                        "{iterations} digest iterations exceed the configured maximum of {}",
                        self.config.max_digest_iterations
                    )));
                }
            }
            HashAlgorithmSpec::AdaptiveKdf {
                time_cost,
                memory_kib,
                parallelism,
                ..
            } => {
                if time_cost == 0 || parallelism == 0 {
                    return Err(ForgeError::invalid_parameters(
                        "time cost and parallelism must be at least 1",
                    ));
                }
                if memory_kib < ARGON2_MIN_KIB_PER_LANE.saturating_mul(parallelism) {
                    return Err(ForgeError::invalid_parameters(format!(
                        "memory cost must be at least {ARGON2_MIN_KIB_PER_LANE} KiB per lane"
                    )));
                }
                if time_cost > self.config.max_time_cost
                    || memory_kib > self.config.max_memory_kib
                    || parallelism > self.config.max_parallelism
                {
                    return Err(ForgeError::invalid_parameters(format!(
                        "{algorithm} exceeds the configured cost bounds \
                         (t<={}, m<={}, p<={})",
                        self.config.max_time_cost,
                        self.config.max_memory_kib,
                        self.config.max_parallelism
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for HashingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashingEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Applies `algorithm` to `(secret, salt)`.
pub(crate) fn compute_digest(
    algorithm: &HashAlgorithmSpec,
    secret: &[u8],
    salt: &[u8],
) -> ForgeResult<Zeroizing<Vec<u8>>> {
    match *algorithm {
        HashAlgorithmSpec::FastDigest {
            function,
            iterations,
        } => Ok(iterated_digest(function, iterations, secret, salt)),
        HashAlgorithmSpec::AdaptiveKdf {
            function,
            time_cost,
            memory_kib,
            parallelism,
        } => kdf::derive(
            function,
            KdfCost {
                time_cost,
                memory_kib,
                parallelism,
            },
            secret,
            salt,
        ),
    }
}

/// A stored record must carry a full-length salt, a digest of the length
/// its algorithm produces, and parameters that could have produced it.
fn check_shape(record: &HashRecord) -> ForgeResult<()> {
    if record.salt().len() < MIN_SALT_LEN {
        return Err(ForgeError::corrupt_record(format!(
            "salt is {} bytes, expected at least {MIN_SALT_LEN}",
            record.salt().len()
        )));
    }

    let expected = record.algorithm().output_len();
    if record.digest().len() != expected {
        return Err(ForgeError::corrupt_record(format!(
            "{} digest is {} bytes, expected {expected}",
            record.algorithm().name(),
            record.digest().len()
        )));
    }

    let plausible = match *record.algorithm() {
        HashAlgorithmSpec::FastDigest { iterations, .. } => iterations >= 1,
        HashAlgorithmSpec::AdaptiveKdf {
            time_cost,
            memory_kib,
            parallelism,
            ..
        } => {
            time_cost >= 1
                && parallelism >= 1
                && memory_kib >= ARGON2_MIN_KIB_PER_LANE.saturating_mul(parallelism)
        }
    };
    if !plausible {
        return Err(ForgeError::corrupt_record(format!(
            "parameters {} cannot have produced this record",
            record.algorithm()
        )));
    }

    Ok(())
}
