//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use passforge::{AppConfig, CharClass, HashAlgorithmSpec, PassForge, PasswordPolicy, SeededRandomSource};

/// A facade over a seeded source, so every run produces the same output.
pub fn seeded_forge(seed: u64) -> PassForge {
    PassForge::with_random_source(&AppConfig::default(), Arc::new(SeededRandomSource::new(seed)))
}

/// A facade over the operating system's CSPRNG.
pub fn os_forge() -> PassForge {
    PassForge::from_config(&AppConfig::default())
}

/// A facade built from an in-memory TOML document.
pub fn forge_from_toml(toml: &str, seed: u64) -> PassForge {
    let config = AppConfig::from_toml_str(toml).expect("Failed to parse test config");
    PassForge::with_random_source(&config, Arc::new(SeededRandomSource::new(seed)))
}

/// Lower, upper and digit with at least one of each.
pub fn alphanumeric_policy(length: usize) -> PasswordPolicy {
    PasswordPolicy::new(length)
        .require_at_least(CharClass::Lower, 1)
        .require_at_least(CharClass::Upper, 1)
        .require_at_least(CharClass::Digit, 1)
}

/// Every class exactly once at minimum.
pub fn full_policy(length: usize) -> PasswordPolicy {
    CharClass::ALL
        .into_iter()
        .fold(PasswordPolicy::new(length), |policy, class| {
            policy.require_at_least(class, 1)
        })
}

/// Argon2id parameters small enough to run many times in a test.
pub fn cheap_kdf() -> HashAlgorithmSpec {
    HashAlgorithmSpec::argon2id(1, 64, 1)
}

/// Counts the characters of `text` belonging to `class`.
pub fn count_class(text: &str, class: CharClass) -> usize {
    text.chars().filter(|c| CharClass::of(*c) == Some(class)).count()
}
