//! Salted digest records handed to external persistence.

use serde::{Deserialize, Serialize};

use super::algorithm::HashAlgorithmSpec;

/// Current binary layout version.
pub const FORMAT_VERSION: u8 = 1;

/// Shortest salt a record may carry, in bytes.
pub const MIN_SALT_LEN: usize = 16;

/// An irreversible, salted digest of a secret.
///
/// Records are immutable once produced; the engine never retains them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRecord {
    format_version: u8,
    algorithm: HashAlgorithmSpec,
    salt: Vec<u8>,
    digest: Vec<u8>,
}

impl HashRecord {
    /// Creates a record in the current format version.
    pub fn new(algorithm: HashAlgorithmSpec, salt: Vec<u8>, digest: Vec<u8>) -> Self {
        Self::from_parts(FORMAT_VERSION, algorithm, salt, digest)
    }

    /// Reassembles a record read back from storage.
    ///
    /// No consistency checks happen here; verification reports a
    /// mismatched shape as a corrupt record.
    pub fn from_parts(
        format_version: u8,
        algorithm: HashAlgorithmSpec,
        salt: Vec<u8>,
        digest: Vec<u8>,
    ) -> Self {
        Self {
            format_version,
            algorithm,
            salt,
            digest,
        }
    }

    /// Layout version the record was written with.
    pub fn format_version(&self) -> u8 {
        self.format_version
    }

    /// Algorithm and parameters used to produce the digest.
    pub fn algorithm(&self) -> &HashAlgorithmSpec {
        &self.algorithm
    }

    /// Per-record random salt.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Stored digest bytes.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }
}
