//! A policy that has passed validation, with its alphabets precomputed.

use std::collections::{BTreeMap, BTreeSet};

use passforge_core::types::{CharClass, PasswordPolicy};

/// An immutable, validated generation policy.
///
/// Only [`PolicyValidator`](super::PolicyValidator) can construct one, so
/// holding a `ValidatedPolicy` proves that every required class still has
/// characters after exclusion and that the minimums fit the length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPolicy {
    source: PasswordPolicy,
    class_alphabets: BTreeMap<CharClass, Vec<char>>,
    alphabet: Vec<char>,
}

impl ValidatedPolicy {
    pub(super) fn new(
        source: PasswordPolicy,
        class_alphabets: BTreeMap<CharClass, Vec<char>>,
        alphabet: Vec<char>,
    ) -> Self {
        Self {
            source,
            class_alphabets,
            alphabet,
        }
    }

    /// Exact number of characters to generate.
    pub fn length(&self) -> usize {
        self.source.length
    }

    /// Classes the password is drawn from.
    pub fn required_classes(&self) -> &BTreeSet<CharClass> {
        &self.source.required_classes
    }

    /// Minimum count for `class`; zero when none was set.
    pub fn min_for(&self, class: CharClass) -> usize {
        self.source.min_per_class.get(&class).copied().unwrap_or(0)
    }

    /// Characters that never appear.
    pub fn excluded_characters(&self) -> &BTreeSet<char> {
        &self.source.excluded_characters
    }

    /// Remaining characters of `class` after exclusion; empty for classes
    /// the policy does not permit.
    pub fn class_alphabet(&self, class: CharClass) -> &[char] {
        self.class_alphabets
            .get(&class)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Union of every permitted class after exclusion.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Size of [`ValidatedPolicy::alphabet`].
    pub fn alphabet_size(&self) -> usize {
        self.alphabet.len()
    }

    /// The caller's original policy.
    pub fn as_policy(&self) -> &PasswordPolicy {
        &self.source
    }
}
