//! Unified error types for PassForge.
//!
//! Every component maps its failures into [`ForgeError`] so callers get a
//! single, distinguishable error kind per failure path through the `?`
//! operator. Messages never carry secret material.

use std::fmt;
use thiserror::Error;

/// Categorization of every failure the engine can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The caller supplied a malformed generation policy.
    InvalidPolicy,
    /// A required character class has no usable characters left.
    ///
    /// Unreachable for a validated policy; signals a programming error.
    InsufficientAlphabet,
    /// The operating-system entropy source could not be read.
    EntropyUnavailable,
    /// A record or name refers to an algorithm this build does not implement.
    UnsupportedAlgorithm,
    /// A stored record is truncated or inconsistent with its algorithm.
    CorruptRecord,
    /// A password and the policy it is checked against disagree.
    InconsistentInput,
    /// Algorithm parameters are outside the primitive's limits or the configured bounds.
    InvalidParameters,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolicy => write!(f, "INVALID_POLICY"),
            Self::InsufficientAlphabet => write!(f, "INSUFFICIENT_ALPHABET"),
            Self::EntropyUnavailable => write!(f, "ENTROPY_UNAVAILABLE"),
            Self::UnsupportedAlgorithm => write!(f, "UNSUPPORTED_ALGORITHM"),
            Self::CorruptRecord => write!(f, "CORRUPT_RECORD"),
            Self::InconsistentInput => write!(f, "INCONSISTENT_INPUT"),
            Self::InvalidParameters => write!(f, "INVALID_PARAMETERS"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The unified error used throughout PassForge.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ForgeError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ForgeError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-policy error.
    pub fn invalid_policy(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPolicy, reason)
    }

    /// Create an insufficient-alphabet error.
    pub fn insufficient_alphabet(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InsufficientAlphabet, message)
    }

    /// Create an entropy-unavailable error.
    pub fn entropy_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntropyUnavailable, message)
    }

    /// Create an unsupported-algorithm error.
    pub fn unsupported_algorithm(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedAlgorithm, message)
    }

    /// Create a corrupt-record error.
    pub fn corrupt_record(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CorruptRecord, message)
    }

    /// Create an inconsistent-input error.
    pub fn inconsistent_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InconsistentInput, message)
    }

    /// Create an invalid-parameters error.
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameters, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Returns `true` if this error has the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for ForgeError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for ForgeError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
