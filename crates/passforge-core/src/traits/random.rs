//! Injectable source of cryptographically secure random bytes.

use crate::result::ForgeResult;

/// A source of cryptographically secure random bytes.
///
/// Passed explicitly into every component that needs randomness so that
/// tests can substitute a deterministic source. Implementations must be
/// safe to share between threads; one whose underlying reader is not
/// must serialize access internally.
///
/// A failed read is reported as
/// [`ErrorKind::EntropyUnavailable`](crate::error::ErrorKind::EntropyUnavailable)
/// and is never retried or papered over with a weaker generator.
pub trait RandomSource: Send + Sync + 'static {
    /// Fills `buf` entirely with random bytes.
    fn fill_bytes(&self, buf: &mut [u8]) -> ForgeResult<()>;

    /// Returns `n` freshly drawn random bytes.
    fn next_bytes(&self, n: usize) -> ForgeResult<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.fill_bytes(&mut buf)?;
        Ok(buf)
    }

    /// Returns a random `u32`, big-endian from four drawn bytes.
    fn next_u32(&self) -> ForgeResult<u32> {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }
}
