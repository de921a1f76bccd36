//! Generation policy enforcement.

use std::collections::BTreeMap;

use passforge_core::config::generator::GeneratorConfig;
use passforge_core::error::ForgeError;
use passforge_core::types::{CharClass, PasswordPolicy};

use super::validated::ValidatedPolicy;

/// Shortest password any policy may request.
pub const MIN_POLICY_LENGTH: usize = 4;

/// Validates caller policies against structural rules and configured limits.
#[derive(Debug, Clone)]
pub struct PolicyValidator {
    /// Minimum policy length.
    min_length: usize,
    /// Maximum policy length.
    max_length: usize,
}

impl PolicyValidator {
    /// Creates a validator from generator configuration.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            min_length: config.min_length.max(MIN_POLICY_LENGTH),
            max_length: config.max_length,
        }
    }

    /// Validates a policy and precomputes its alphabets.
    ///
    /// Returns the first violation found as an `InvalidPolicy` error.
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<ValidatedPolicy, ForgeError> {
        if policy.length < self.min_length {
            return Err(ForgeError::invalid_policy(format!(
                "length {} is below the minimum of {}",
                policy.length, self.min_length
            )));
        }

        if policy.length > self.max_length {
            return Err(ForgeError::invalid_policy(format!(
                "length {} exceeds the maximum of {}",
                policy.length, self.max_length
            )));
        }

        if policy.required_classes.is_empty() {
            return Err(ForgeError::invalid_policy(
                "no character classes are required, so the alphabet is empty",
            ));
        }

        if let Some(class) = policy
            .min_per_class
            .keys()
            .find(|class| !policy.required_classes.contains(class))
        {
            return Err(ForgeError::invalid_policy(format!(
                "a minimum is set for class '{class}' which is not required"
            )));
        }

        let min_total = policy
            .min_per_class
            .values()
            .try_fold(0usize, |acc, n| acc.checked_add(*n));
        match min_total {
            Some(total) if total <= policy.length => {}
            Some(total) => {
                return Err(ForgeError::invalid_policy(format!(
                    "per-class minimums sum to {total}, exceeding the length of {}",
                    policy.length
                )));
            }
            None => {
                return Err(ForgeError::invalid_policy(
                    "per-class minimums overflow",
                ));
            }
        }

        let mut class_alphabets = BTreeMap::new();
        for class in &policy.required_classes {
            let remaining: Vec<char> = class
                .alphabet()
                .chars()
                .filter(|c| !policy.excluded_characters.contains(c))
                .collect();
            if remaining.is_empty() {
                return Err(ForgeError::invalid_policy(format!(
                    "excluded characters remove every character of required class '{class}'"
                )));
            }
            class_alphabets.insert(*class, remaining);
        }

        let alphabet: Vec<char> = CharClass::ALL
            .iter()
            .filter_map(|class| class_alphabets.get(class))
            .flatten()
            .copied()
            .collect();
        if alphabet.is_empty() {
            return Err(ForgeError::invalid_policy("the effective alphabet is empty"));
        }

        tracing::debug!(
            length = policy.length,
            classes = policy.required_classes.len(),
            alphabet_size = alphabet.len(),
            "Policy validated"
        );

        Ok(ValidatedPolicy::new(policy.clone(), class_alphabets, alphabet))
    }
}

impl Default for PolicyValidator {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}
