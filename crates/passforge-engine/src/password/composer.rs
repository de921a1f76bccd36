//! Policy-constrained password composition.

use std::sync::Arc;

use zeroize::Zeroizing;

use passforge_core::error::ForgeError;
use passforge_core::result::ForgeResult;
use passforge_core::traits::RandomSource;

use super::generated::GeneratedPassword;
use crate::policy::ValidatedPolicy;
use crate::random::{shuffle, uniform_index};

/// Builds passwords that satisfy a validated policy.
///
/// Composition runs in three steps:
/// 1. Per-class minimums, each drawn uniformly from that class's alphabet.
/// 2. Remaining positions, drawn uniformly from the union alphabet.
/// 3. A Fisher–Yates shuffle so the class of a position reveals nothing.
#[derive(Clone)]
pub struct PasswordComposer {
    random: Arc<dyn RandomSource>,
}

impl PasswordComposer {
    /// Creates a composer drawing from `random`.
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Composes one password for `policy`.
    pub fn compose(&self, policy: &Arc<ValidatedPolicy>) -> ForgeResult<GeneratedPassword> {
        let length = policy.length();
        let source = self.random.as_ref();
        let mut characters = Zeroizing::new(Vec::with_capacity(length));

        for class in policy.required_classes() {
            let alphabet = policy.class_alphabet(*class);
            if alphabet.is_empty() {
                return Err(ForgeError::insufficient_alphabet(format!(
                    "required class '{class}' has no characters left after exclusion"
                )));
            }
            for _ in 0..policy.min_for(*class) {
                characters.push(alphabet[uniform_index(source, alphabet.len())?]);
            }
        }

        let alphabet = policy.alphabet();
        if alphabet.is_empty() {
            return Err(ForgeError::insufficient_alphabet(
                "the effective alphabet is empty",
            ));
        }
        while characters.len() < length {
            characters.push(alphabet[uniform_index(source, alphabet.len())?]);
        }

        shuffle(source, &mut characters)?;

        tracing::debug!(
            length,
            alphabet_size = alphabet.len(),
            "Password composed"
        );

        Ok(GeneratedPassword::new(
            std::mem::take(&mut *characters),
            Arc::clone(policy),
        ))
    }
}

impl std::fmt::Debug for PasswordComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordComposer").finish_non_exhaustive()
    }
}
