//! Argon2-family key derivation.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use passforge_core::error::{ErrorKind, ForgeError};
use passforge_core::result::ForgeResult;
use passforge_core::types::{KDF_OUTPUT_LEN, KdfFunction};

/// Cost parameters for one derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfCost {
    /// Passes over memory.
    pub time_cost: u32,
    /// Memory size in KiB.
    pub memory_kib: u32,
    /// Lanes.
    pub parallelism: u32,
}

/// Derives a [`KDF_OUTPUT_LEN`]-byte digest from `secret` and `salt`.
///
/// Runs to completion once started; there is no cancellation point.
pub fn derive(
    function: KdfFunction,
    cost: KdfCost,
    secret: &[u8],
    salt: &[u8],
) -> ForgeResult<Zeroizing<Vec<u8>>> {
    let params = Params::new(
        cost.memory_kib,
        cost.time_cost,
        cost.parallelism,
        Some(KDF_OUTPUT_LEN),
    )
    .map_err(|e| {
        ForgeError::with_source(
            ErrorKind::InvalidParameters,
            format!("Invalid {} parameters: {e}", function.name()),
            e,
        )
    })?;

    let argon2 = Argon2::new(algorithm(function), Version::V0x13, params);
    let mut out = Zeroizing::new(vec![0u8; KDF_OUTPUT_LEN]);
    argon2
        .hash_password_into(secret, salt, out.as_mut_slice())
        .map_err(|e| {
            ForgeError::with_source(
                ErrorKind::InvalidParameters,
                format!("{} derivation failed: {e}", function.name()),
                e,
            )
        })?;
    Ok(out)
}

fn algorithm(function: KdfFunction) -> Algorithm {
    match function {
        KdfFunction::Argon2id => Algorithm::Argon2id,
        KdfFunction::Argon2i => Algorithm::Argon2i,
        KdfFunction::Argon2d => Algorithm::Argon2d,
    }
}
