//! Engine configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `PASSFORGE__*` environment
//! variables. Every section has defaults, so an empty configuration is
//! valid.

pub mod cost_model;
pub mod generator;
pub mod hashing;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::cost_model::CostModelConfig;
use self::generator::GeneratorConfig;
use self::hashing::HashingConfig;
use self::logging::LoggingConfig;

use crate::error::ForgeError;
use crate::types::record::MIN_SALT_LEN;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Password generation limits and defaults.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Hashing engine settings.
    #[serde(default)]
    pub hashing: HashingConfig,
    /// Brute-force cost weights.
    #[serde(default)]
    pub cost_model: CostModelConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// `path` is passed to [`config::File::with_name`], so the extension may
    /// be omitted. A missing file is not an error. Environment variables
    /// use the `PASSFORGE` prefix and `__` as the section separator, e.g.
    /// `PASSFORGE__HASHING__SALT_LENGTH=32`.
    pub fn load(path: &str) -> Result<Self, ForgeError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PASSFORGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ForgeError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| ForgeError::configuration(format!("Failed to deserialize config: {e}")))?;
        app.validate()?;
        Ok(app)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, ForgeError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Reject settings that would weaken or break the engine.
    pub fn validate(&self) -> Result<(), ForgeError> {
        if self.hashing.salt_length < MIN_SALT_LEN {
            return Err(ForgeError::configuration(format!(
                "hashing.salt_length must be at least {MIN_SALT_LEN} bytes, got {}",
                self.hashing.salt_length
            )));
        }
        if self.hashing.salt_length > u16::MAX as usize {
            return Err(ForgeError::configuration(
                "hashing.salt_length does not fit the record layout",
            ));
        }
        if self.generator.min_length < 4 {
            return Err(ForgeError::configuration(format!(
                "generator.min_length must be at least 4, got {}",
                self.generator.min_length
            )));
        }
        if self.generator.min_length > self.generator.max_length {
            return Err(ForgeError::configuration(format!(
                "generator.min_length ({}) exceeds generator.max_length ({})",
                self.generator.min_length, self.generator.max_length
            )));
        }

        let weights = [
            ("cost_model.sha256_weight", self.cost_model.sha256_weight),
            ("cost_model.sha512_weight", self.cost_model.sha512_weight),
            (
                "cost_model.kdf_weight_per_kib_pass",
                self.cost_model.kdf_weight_per_kib_pass,
            ),
        ];
        for (name, weight) in weights {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(ForgeError::configuration(format!(
                    "{name} must be a positive number, got {weight}"
                )));
            }
        }

        Ok(())
    }
}
