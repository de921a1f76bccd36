//! In-memory generated password.

use std::fmt;
use std::sync::Arc;

use zeroize::{Zeroize, Zeroizing};

use crate::policy::ValidatedPolicy;

/// A freshly composed password and the policy it satisfies.
///
/// The character buffer is zeroed on drop. `Debug` output is redacted and
/// the plaintext is only reachable through [`GeneratedPassword::expose`].
pub struct GeneratedPassword {
    characters: Vec<char>,
    policy: Arc<ValidatedPolicy>,
}

impl GeneratedPassword {
    pub(crate) fn new(characters: Vec<char>, policy: Arc<ValidatedPolicy>) -> Self {
        Self { characters, policy }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the password has no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// The ordered characters.
    pub fn chars(&self) -> &[char] {
        &self.characters
    }

    /// The policy used to compose this password.
    pub fn policy(&self) -> &ValidatedPolicy {
        &self.policy
    }

    /// Shared handle to the policy used to compose this password.
    pub fn policy_handle(&self) -> Arc<ValidatedPolicy> {
        Arc::clone(&self.policy)
    }

    /// Copies the password into a string that is zeroed when dropped.
    pub fn expose(&self) -> Zeroizing<String> {
        let mut text = Zeroizing::new(String::with_capacity(self.characters.len()));
        text.extend(self.characters.iter());
        text
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.characters.zeroize();
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("characters", &"<redacted>")
            .field("length", &self.characters.len())
            .finish()
    }
}
