//! Operating-system entropy source.

use rand::RngCore;
use rand::rngs::OsRng;

use passforge_core::error::{ErrorKind, ForgeError};
use passforge_core::result::ForgeResult;
use passforge_core::traits::RandomSource;

/// Reads from the operating system's CSPRNG on every call.
///
/// The OS interface is safe for concurrent use, so no lock is held.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl OsRandomSource {
    /// Creates a new OS-backed source.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandomSource {
    fn fill_bytes(&self, buf: &mut [u8]) -> ForgeResult<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            tracing::error!(requested = buf.len(), "OS entropy source read failed");
            ForgeError::with_source(
                ErrorKind::EntropyUnavailable,
                format!("OS entropy source unavailable: {e}"),
                e,
            )
        })
    }
}
