//! Batches of passwords with lengths drawn from a range.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use passforge_core::types::{Complexity, PasswordPolicy};

/// How each password of a batch derives its policy from its drawn length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BatchComposition {
    /// Fixed classes, minimums and exclusions shared by every password.
    /// The template's `length` is ignored.
    Template {
        /// Shared policy.
        template: PasswordPolicy,
    },
    /// All four classes, with per-class minimums recomputed from the
    /// preset ratios for every drawn length.
    Complexity {
        /// Ratio preset.
        complexity: Complexity,
        /// Characters that must never appear.
        #[serde(default)]
        excluded_characters: BTreeSet<char>,
    },
}

/// A request for `count` passwords whose lengths are drawn uniformly from
/// `[min_length, max_length]`.
///
/// Every drawn length gets its own policy, validated on its own, so a
/// range that reaches below the policy's minimum total fails on the first
/// short draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Number of passwords to produce.
    pub count: usize,
    /// Shortest length, inclusive.
    pub min_length: usize,
    /// Longest length, inclusive.
    pub max_length: usize,
    /// Policy derivation for each drawn length.
    pub composition: BatchComposition,
}

impl BatchRequest {
    /// Creates a request sharing `template` across `count` passwords.
    pub fn new(count: usize, min_length: usize, max_length: usize, template: PasswordPolicy) -> Self {
        Self {
            count,
            min_length,
            max_length,
            composition: BatchComposition::Template { template },
        }
    }

    /// Creates a request whose class minimums follow `complexity` at every
    /// drawn length.
    pub fn with_complexity(
        count: usize,
        min_length: usize,
        max_length: usize,
        complexity: Complexity,
    ) -> Self {
        Self {
            count,
            min_length,
            max_length,
            composition: BatchComposition::Complexity {
                complexity,
                excluded_characters: BTreeSet::new(),
            },
        }
    }

    /// Adds characters that no password of the batch may contain.
    pub fn excluding(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        match &mut self.composition {
            BatchComposition::Template { template } => {
                template.excluded_characters.extend(chars);
            }
            BatchComposition::Complexity {
                excluded_characters,
                ..
            } => excluded_characters.extend(chars),
        }
        self
    }

    /// The policy for a password of `length` characters.
    pub fn policy_for(&self, length: usize) -> PasswordPolicy {
        match &self.composition {
            BatchComposition::Template { template } => PasswordPolicy {
                length,
                ..template.clone()
            },
            BatchComposition::Complexity {
                complexity,
                excluded_characters,
            } => PasswordPolicy::from_complexity(length, *complexity)
                .exclude(excluded_characters.iter().copied()),
        }
    }
}
