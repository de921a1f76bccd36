//! # PassForge
//!
//! Policy-driven password generation, salted hashing with timing-safe
//! verification, and attack-cost estimation.
//!
//! [`PassForge`] wires the engine components together from an
//! [`AppConfig`]:
//!
//! ```no_run
//! use passforge::{AppConfig, PassForge, PasswordPolicy, CharClass};
//!
//! # fn main() -> passforge::ForgeResult<()> {
//! let forge = PassForge::from_config(&AppConfig::default());
//! let policy = PasswordPolicy::new(20)
//!     .require_at_least(CharClass::Upper, 2)
//!     .require_at_least(CharClass::Digit, 2)
//!     .require(CharClass::Lower);
//! let password = forge.generate(&policy)?;
//! let record = forge.hash_default(&password.expose())?;
//! assert!(forge.verify(&password.expose(), &record)?);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod telemetry;

use std::sync::Arc;

pub use passforge_core::config::AppConfig;
pub use passforge_core::error::{ErrorKind, ForgeError};
pub use passforge_core::result::ForgeResult;
pub use passforge_core::traits::RandomSource;
pub use passforge_core::types::{
    BruteForceCostEstimate, CharClass, Complexity, CompositionReport, DigestFunction,
    EntropyReport, HashAlgorithmSpec, HashRecord, KdfFunction, PasswordPolicy, StrengthClass,
};
pub use passforge_engine::{
    BruteForceEstimator, GeneratedPassword, HashingEngine, OsRandomSource, PasswordComposer,
    PolicyValidator, SeededRandomSource, StrengthEstimator, ValidatedPolicy,
};

pub use batch::{BatchComposition, BatchRequest};

use passforge_core::config::generator::GeneratorConfig;
use passforge_engine::hashing;
use passforge_engine::random::uniform_in_range;

/// Entry point bundling every component behind one shared random source.
///
/// All operations take `&self` and the type is `Send + Sync`, so one
/// instance can serve any number of threads.
#[derive(Clone)]
pub struct PassForge {
    random: Arc<dyn RandomSource>,
    generator: GeneratorConfig,
    validator: PolicyValidator,
    composer: PasswordComposer,
    strength: StrengthEstimator,
    hashing: HashingEngine,
    bruteforce: BruteForceEstimator,
}

impl PassForge {
    /// Builds a facade drawing from the operating system's CSPRNG.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_random_source(config, Arc::new(OsRandomSource::new()))
    }

    /// Builds a facade drawing from `random`.
    ///
    /// Tests pass a [`SeededRandomSource`] here for reproducible output.
    pub fn with_random_source(config: &AppConfig, random: Arc<dyn RandomSource>) -> Self {
        let forge = Self {
            generator: config.generator.clone(),
            validator: PolicyValidator::new(&config.generator),
            composer: PasswordComposer::new(Arc::clone(&random)),
            strength: StrengthEstimator::new(),
            hashing: HashingEngine::new(Arc::clone(&random), config.hashing.clone()),
            bruteforce: BruteForceEstimator::new(config.cost_model.clone()),
            random,
        };

        tracing::info!(
            default_length = config.generator.default_length,
            default_algorithm = %config.hashing.default_algorithm,
            "PassForge initialized"
        );

        forge
    }

    // ── Generation ───────────────────────────────────────────────

    /// Validates `policy`.
    pub fn validate(&self, policy: &PasswordPolicy) -> ForgeResult<ValidatedPolicy> {
        self.validator.validate(policy)
    }

    /// Generates one password satisfying `policy`.
    pub fn generate(&self, policy: &PasswordPolicy) -> ForgeResult<GeneratedPassword> {
        let validated = Arc::new(self.validator.validate(policy)?);
        self.composer.compose(&validated)
    }

    /// Generates one password with the configured default policy.
    pub fn generate_default(&self) -> ForgeResult<GeneratedPassword> {
        self.generate(&self.generator.default_policy())
    }

    /// Generates `request.count` passwords, each with an independently
    /// drawn length.
    pub fn generate_batch(&self, request: &BatchRequest) -> ForgeResult<Vec<GeneratedPassword>> {
        if request.count == 0 {
            return Err(ForgeError::invalid_policy(
                "a batch must request at least one password",
            ));
        }
        if request.count > self.generator.batch_max {
            return Err(ForgeError::invalid_policy(format!(
                "a batch may request at most {} passwords, got {}",
                self.generator.batch_max, request.count
            )));
        }
        if request.min_length > request.max_length {
            return Err(ForgeError::invalid_policy(format!(
                "batch length range is empty ({} > {})",
                request.min_length, request.max_length
            )));
        }

        let mut passwords = Vec::with_capacity(request.count);
        for _ in 0..request.count {
            let length =
                uniform_in_range(self.random.as_ref(), request.min_length, request.max_length)?;
            passwords.push(self.generate(&request.policy_for(length))?);
        }

        tracing::debug!(
            count = request.count,
            min_length = request.min_length,
            max_length = request.max_length,
            "Password batch generated"
        );

        Ok(passwords)
    }

    // ── Estimation ───────────────────────────────────────────────

    /// Entropy of `password` under the policy it was generated with.
    pub fn estimate_strength(&self, password: &GeneratedPassword) -> ForgeResult<EntropyReport> {
        self.strength.estimate(password, password.policy())
    }

    /// Entropy of `password` under an explicitly supplied `policy`.
    pub fn estimate_strength_under(
        &self,
        password: &GeneratedPassword,
        policy: &ValidatedPolicy,
    ) -> ForgeResult<EntropyReport> {
        self.strength.estimate(password, policy)
    }

    /// Pattern-aware entropy of a caller-chosen secret.
    pub fn assess_secret(&self, secret: &str) -> EntropyReport {
        self.strength.assess_secret(secret)
    }

    /// Per-class character counts of `password`.
    pub fn analyze_composition(&self, password: &GeneratedPassword) -> CompositionReport {
        self.strength.analyze_composition(password)
    }

    /// Expected attack effort against a secret of the reported entropy
    /// stored with `algorithm`.
    pub fn estimate_brute_force_cost(
        &self,
        report: &EntropyReport,
        algorithm: &HashAlgorithmSpec,
    ) -> BruteForceCostEstimate {
        self.bruteforce.estimate(report, algorithm)
    }

    /// Measured per-guess cost of `algorithm` relative to one SHA-256.
    pub fn calibrate(&self, algorithm: &HashAlgorithmSpec, samples: u32) -> ForgeResult<f64> {
        self.bruteforce.calibrate(&self.hashing, algorithm, samples)
    }

    // ── Hashing ──────────────────────────────────────────────────

    /// Hashes `secret` with `algorithm` under a fresh salt.
    pub fn hash(&self, secret: &str, algorithm: &HashAlgorithmSpec) -> ForgeResult<HashRecord> {
        self.hashing.hash(secret, algorithm)
    }

    /// Hashes `secret` with the configured default algorithm.
    pub fn hash_default(&self, secret: &str) -> ForgeResult<HashRecord> {
        self.hashing.hash_default(secret)
    }

    /// Checks `secret` against `record` in constant time.
    pub fn verify(&self, secret: &str, record: &HashRecord) -> ForgeResult<bool> {
        self.hashing.verify(secret, record)
    }

    /// Whether `record` should be replaced by a hash under the configured
    /// default algorithm.
    pub fn needs_rehash(&self, record: &HashRecord) -> bool {
        self.hashing
            .needs_rehash(record, self.hashing.default_algorithm())
    }

    /// Wraps a hex SHA-256 digest of `password ‖ salt_text` from an older
    /// store as a verifiable record.
    pub fn import_legacy(&self, digest_hex: &str, salt_text: &str) -> ForgeResult<HashRecord> {
        hashing::import_sha256_hex(digest_hex, salt_text)
    }

    // ── Record layout ────────────────────────────────────────────

    /// Binary storage layout of `record`.
    pub fn encode_record(&self, record: &HashRecord) -> ForgeResult<Vec<u8>> {
        hashing::encode_record(record)
    }

    /// Parses the binary storage layout.
    pub fn decode_record(&self, bytes: &[u8]) -> ForgeResult<HashRecord> {
        hashing::decode_record(bytes)
    }

    /// `$pf$`-prefixed text form of `record`.
    pub fn record_to_text(&self, record: &HashRecord) -> ForgeResult<String> {
        hashing::record_to_text(record)
    }

    /// Parses the `$pf$`-prefixed text form.
    pub fn record_from_text(&self, text: &str) -> ForgeResult<HashRecord> {
        hashing::record_from_text(text)
    }

    /// JSON form of `record`.
    pub fn record_to_json(&self, record: &HashRecord) -> ForgeResult<String> {
        hashing::record_to_json(record)
    }

    /// Parses the JSON form, reporting unknown algorithms as
    /// `UnsupportedAlgorithm`.
    pub fn record_from_json(&self, json: &str) -> ForgeResult<HashRecord> {
        hashing::record_from_json(json)
    }
}

impl Default for PassForge {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl std::fmt::Debug for PassForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassForge")
            .field("generator", &self.generator)
            .field("hashing", &self.hashing)
            .field("bruteforce", &self.bruteforce)
            .finish_non_exhaustive()
    }
}
