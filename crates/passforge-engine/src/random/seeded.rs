//! Deterministic substitute source for tests and reproducible runs.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use passforge_core::error::ForgeError;
use passforge_core::result::ForgeResult;
use passforge_core::traits::RandomSource;

/// A seeded CSPRNG behind a mutex.
///
/// Two sources built from the same seed produce the same byte stream.
/// Never use one to produce real passwords or salts.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    /// Creates a source from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn fill_bytes(&self, buf: &mut [u8]) -> ForgeResult<()> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ForgeError::entropy_unavailable("Seeded source lock poisoned"))?;
        rng.fill_bytes(buf);
        Ok(())
    }
}
