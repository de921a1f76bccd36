//! Import of records written by the earlier vault format.
//!
//! That format stored `hex(sha256(password || salt_text))` next to the salt
//! as 32 hex characters, hashing the salt's text rather than its decoded
//! bytes. Such a record is exactly a single-round SHA-256 fast digest whose
//! salt is the text's bytes, so it verifies through the normal path.

use passforge_core::error::ForgeError;
use passforge_core::result::ForgeResult;
use passforge_core::types::{DigestFunction, HashAlgorithmSpec, HashRecord, MIN_SALT_LEN};

/// Converts a legacy `(hex digest, salt text)` pair into a [`HashRecord`].
pub fn import_sha256_hex(digest_hex: &str, salt_text: &str) -> ForgeResult<HashRecord> {
    let digest = hex::decode(digest_hex.trim())
        .map_err(|e| ForgeError::corrupt_record(format!("legacy digest is not hex: {e}")))?;
    if digest.len() != DigestFunction::Sha256.output_len() {
        return Err(ForgeError::corrupt_record(format!(
            "legacy digest must be 32 bytes, got {}",
            digest.len()
        )));
    }

    let salt = salt_text.trim().as_bytes().to_vec();
    if salt.len() < MIN_SALT_LEN {
        return Err(ForgeError::corrupt_record(format!(
            "legacy salt must be at least {MIN_SALT_LEN} bytes, got {}",
            salt.len()
        )));
    }

    Ok(HashRecord::new(HashAlgorithmSpec::sha256(1), salt, digest))
}
