//! Password generation configuration.

use serde::{Deserialize, Serialize};

use crate::types::charset::CharClass;
use crate::types::policy::PasswordPolicy;

/// Limits and defaults applied to generation policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Length used when the caller does not pick one.
    #[serde(default = "default_length")]
    pub default_length: usize,
    /// Shortest accepted policy length.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Longest accepted policy length.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Classes used by [`GeneratorConfig::default_policy`].
    #[serde(default = "default_classes")]
    pub default_classes: Vec<CharClass>,
    /// Whether the default policy drops visually ambiguous characters.
    #[serde(default)]
    pub exclude_ambiguous: bool,
    /// Largest number of passwords a single batch may request.
    #[serde(default = "default_batch_max")]
    pub batch_max: usize,
}

impl GeneratorConfig {
    /// Builds the policy used when the caller supplies none: the default
    /// length with at least one character from every default class.
    pub fn default_policy(&self) -> PasswordPolicy {
        let mut policy = PasswordPolicy::new(self.default_length);
        for class in &self.default_classes {
            policy = policy.require_at_least(*class, 1);
        }
        if self.exclude_ambiguous {
            policy = policy.exclude_ambiguous();
        }
        policy
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            min_length: default_min_length(),
            max_length: default_max_length(),
            default_classes: default_classes(),
            exclude_ambiguous: false,
            batch_max: default_batch_max(),
        }
    }
}

fn default_length() -> usize {
    16
}

fn default_min_length() -> usize {
    4
}

fn default_max_length() -> usize {
    1024
}

fn default_classes() -> Vec<CharClass> {
    CharClass::ALL.to_vec()
}

fn default_batch_max() -> usize {
    100
}
