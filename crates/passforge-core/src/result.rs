//! Convenience result type alias for PassForge.

use crate::error::ForgeError;

/// A specialized `Result` type for PassForge operations.
pub type ForgeResult<T> = Result<T, ForgeError>;
