//! Caller-supplied password generation policy.
//!
//! A [`PasswordPolicy`] is raw input: nothing about it is trusted until it
//! has passed through the engine's policy validator.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::charset::{AMBIGUOUS_CHARACTERS, CharClass};

/// A password generation policy as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Exact number of characters to generate.
    pub length: usize,
    /// Classes the password is drawn from.
    #[serde(default)]
    pub required_classes: BTreeSet<CharClass>,
    /// Minimum number of characters per required class.
    #[serde(default)]
    pub min_per_class: BTreeMap<CharClass, usize>,
    /// Characters that must never appear.
    #[serde(default)]
    pub excluded_characters: BTreeSet<char>,
}

impl PasswordPolicy {
    /// Creates an empty policy of the given length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            required_classes: BTreeSet::new(),
            min_per_class: BTreeMap::new(),
            excluded_characters: BTreeSet::new(),
        }
    }

    /// Adds a class to the permitted set without a minimum count.
    pub fn require(mut self, class: CharClass) -> Self {
        self.required_classes.insert(class);
        self
    }

    /// Adds a class and demands at least `count` characters from it.
    pub fn require_at_least(mut self, class: CharClass, count: usize) -> Self {
        self.required_classes.insert(class);
        self.min_per_class.insert(class, count);
        self
    }

    /// Excludes every character of `chars`.
    pub fn exclude(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.excluded_characters.extend(chars);
        self
    }

    /// Excludes characters that are easily confused when read.
    pub fn exclude_ambiguous(self) -> Self {
        self.exclude(AMBIGUOUS_CHARACTERS.chars())
    }

    /// Builds a policy with all four classes and minimums derived from a preset.
    ///
    /// Each class minimum is `floor(length * percent / 100)`, so the sum
    /// never exceeds `length`.
    pub fn from_complexity(length: usize, complexity: Complexity) -> Self {
        let mut policy = Self::new(length);
        for class in CharClass::ALL {
            let percent = complexity.percent(class);
            // Split at 100 so the product cannot overflow for any length.
            let count = length / 100 * percent + length % 100 * percent / 100;
            policy = policy.require_at_least(class, count);
        }
        policy
    }

    /// Sum of the configured per-class minimums, saturating at `usize::MAX`.
    pub fn min_total(&self) -> usize {
        self.min_per_class
            .values()
            .fold(0usize, |total, min| total.saturating_add(*min))
    }
}

/// Class-ratio presets for quick policy construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Mostly lowercase letters.
    Low,
    /// An even split across all classes.
    #[default]
    Balanced,
    /// Weighted toward uppercase letters and digits.
    High,
}

impl Complexity {
    /// Percentage of the password length reserved for `class`.
    pub fn percent(self, class: CharClass) -> usize {
        match (self, class) {
            (Self::Low, CharClass::Lower) => 60,
            (Self::Low, CharClass::Upper) => 10,
            (Self::Low, CharClass::Digit) => 20,
            (Self::Low, CharClass::Symbol) => 10,
            (Self::Balanced, _) => 25,
            (Self::High, CharClass::Lower) => 20,
            (Self::High, CharClass::Upper) => 30,
            (Self::High, CharClass::Digit) => 30,
            (Self::High, CharClass::Symbol) => 20,
        }
    }
}
