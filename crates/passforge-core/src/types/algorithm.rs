//! Closed set of hashing algorithms and their parameters.
//!
//! Selection is a tagged variant rather than a trait object so that every
//! verification path matches exhaustively and an unknown format can never
//! be accepted silently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForgeError;

/// Output length of every adaptive KDF digest, in bytes.
pub const KDF_OUTPUT_LEN: usize = 32;

/// One-way functions usable as a (possibly iterated) fast digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestFunction {
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
}

impl DigestFunction {
    /// Wire identifier.
    pub fn id(self) -> u8 {
        match self {
            Self::Sha256 => 0x01,
            Self::Sha512 => 0x02,
        }
    }

    /// Digest length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

/// Memory-hard key-derivation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KdfFunction {
    /// Argon2id (hybrid), the recommended default.
    Argon2id,
    /// Argon2i (data-independent).
    Argon2i,
    /// Argon2d (data-dependent).
    Argon2d,
}

impl KdfFunction {
    /// Wire identifier.
    pub fn id(self) -> u8 {
        match self {
            Self::Argon2id => 0x10,
            Self::Argon2i => 0x11,
            Self::Argon2d => 0x12,
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Argon2id => "argon2id",
            Self::Argon2i => "argon2i",
            Self::Argon2d => "argon2d",
        }
    }
}

impl FromStr for DigestFunction {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            other => Err(ForgeError::unsupported_algorithm(format!(
                "unknown digest function '{other}'"
            ))),
        }
    }
}

impl FromStr for KdfFunction {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "argon2id" => Ok(Self::Argon2id),
            "argon2i" => Ok(Self::Argon2i),
            "argon2d" => Ok(Self::Argon2d),
            other => Err(ForgeError::unsupported_algorithm(format!(
                "unknown key-derivation function '{other}'"
            ))),
        }
    }
}

/// The hashing algorithm and parameters a record was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HashAlgorithmSpec {
    /// `digest_i = H(digest_{i-1} || salt)` iterated `iterations` times,
    /// seeded with the secret. Kept for verifying older records.
    FastDigest {
        /// Underlying one-way function.
        function: DigestFunction,
        /// Number of chained applications, at least 1.
        iterations: u32,
    },
    /// Tunable memory- and time-hard derivation.
    AdaptiveKdf {
        /// Underlying KDF.
        function: KdfFunction,
        /// Number of passes over memory.
        time_cost: u32,
        /// Memory size in KiB.
        memory_kib: u32,
        /// Degree of parallelism (lanes).
        parallelism: u32,
    },
}

impl HashAlgorithmSpec {
    /// Iterated SHA-256.
    pub fn sha256(iterations: u32) -> Self {
        Self::FastDigest {
            function: DigestFunction::Sha256,
            iterations,
        }
    }

    /// Iterated SHA-512.
    pub fn sha512(iterations: u32) -> Self {
        Self::FastDigest {
            function: DigestFunction::Sha512,
            iterations,
        }
    }

    /// Argon2id with explicit cost parameters.
    pub fn argon2id(time_cost: u32, memory_kib: u32, parallelism: u32) -> Self {
        Self::AdaptiveKdf {
            function: KdfFunction::Argon2id,
            time_cost,
            memory_kib,
            parallelism,
        }
    }

    /// Name of the underlying function.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FastDigest { function, .. } => function.name(),
            Self::AdaptiveKdf { function, .. } => function.name(),
        }
    }

    /// Wire identifier of the underlying function.
    pub fn algorithm_id(&self) -> u8 {
        match self {
            Self::FastDigest { function, .. } => function.id(),
            Self::AdaptiveKdf { function, .. } => function.id(),
        }
    }

    /// Expected digest length for records produced with this spec.
    pub fn output_len(&self) -> usize {
        match self {
            Self::FastDigest { function, .. } => function.output_len(),
            Self::AdaptiveKdf { .. } => KDF_OUTPUT_LEN,
        }
    }

    /// Fast digests defend poorly against brute force and should not be
    /// used for new records.
    pub fn is_discouraged(&self) -> bool {
        matches!(self, Self::FastDigest { .. })
    }
}

impl Default for HashAlgorithmSpec {
    /// Argon2id, 2 passes over 19 MiB, one lane.
    fn default() -> Self {
        Self::argon2id(2, 19 * 1024, 1)
    }
}

impl fmt::Display for HashAlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FastDigest {
                function,
                iterations,
            } => write!(f, "{}(i={iterations})", function.name()),
            Self::AdaptiveKdf {
                function,
                time_cost,
                memory_kib,
                parallelism,
            } => write!(
                f,
                "{}(t={time_cost},m={memory_kib},p={parallelism})",
                function.name()
            ),
        }
    }
}
