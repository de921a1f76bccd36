//! Entropy estimation for generated passwords and arbitrary secrets.

use passforge_core::error::ForgeError;
use passforge_core::types::{CharClass, CompositionReport, EntropyReport};

use crate::password::GeneratedPassword;
use crate::policy::ValidatedPolicy;

/// Computes entropy reports.
///
/// For generated passwords the attacker is assumed to know the policy but
/// not which classes ended up in the output, so the guess space is the
/// full permitted alphabet raised to the length.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthEstimator;

impl StrengthEstimator {
    /// Creates a new estimator.
    pub fn new() -> Self {
        Self
    }

    /// `length * log2(alphabet_size)` for a password composed under `policy`.
    ///
    /// Fails with `InconsistentInput` if the password length differs from
    /// the policy length.
    pub fn estimate(
        &self,
        password: &GeneratedPassword,
        policy: &ValidatedPolicy,
    ) -> Result<EntropyReport, ForgeError> {
        if password.len() != policy.length() {
            return Err(ForgeError::inconsistent_input(format!(
                "password has {} characters but the policy requires {}",
                password.len(),
                policy.length()
            )));
        }
        Ok(self.estimate_policy(policy))
    }

    /// Entropy of any password the policy can produce.
    pub fn estimate_policy(&self, policy: &ValidatedPolicy) -> EntropyReport {
        Self::uniform_entropy(policy.length(), policy.alphabet_size())
    }

    /// Entropy of `length` independent uniform draws from `alphabet_size`
    /// symbols.
    pub fn uniform_entropy(length: usize, alphabet_size: usize) -> EntropyReport {
        if alphabet_size == 0 {
            return EntropyReport::from_bits(0.0);
        }
        EntropyReport::from_bits(length as f64 * (alphabet_size as f64).log2())
    }

    /// Pattern-aware estimate for a secret the caller chose themselves.
    ///
    /// Uses zxcvbn's guess count, so dictionary words, keyboard walks and
    /// repeats score far below their naive alphabet entropy.
    pub fn assess_secret(&self, secret: &str) -> EntropyReport {
        if secret.is_empty() {
            return EntropyReport::from_bits(0.0);
        }
        let estimate = zxcvbn::zxcvbn(secret, &[]);
        EntropyReport::from_bits(estimate.guesses_log10() * std::f64::consts::LOG2_10)
    }

    /// Counts the characters of each class in a password.
    pub fn analyze_composition(&self, password: &GeneratedPassword) -> CompositionReport {
        let mut report = CompositionReport {
            total_length: password.len(),
            ..CompositionReport::default()
        };
        for c in password.chars() {
            match CharClass::of(*c) {
                Some(CharClass::Lower) => report.lower += 1,
                Some(CharClass::Upper) => report.upper += 1,
                Some(CharClass::Digit) => report.digit += 1,
                Some(CharClass::Symbol) => report.symbol += 1,
                None => report.other += 1,
            }
        }
        report
    }
}
