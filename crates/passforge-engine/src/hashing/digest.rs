//! Iterated fast digests: `d_0 = secret`, `d_i = H(d_{i-1} || salt)`.

use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

use passforge_core::types::DigestFunction;

/// Applies `function` `iterations` times, chaining the salt into each round.
///
/// Every intermediate buffer, including the copied secret, is zeroed on
/// drop.
pub fn iterated_digest(
    function: DigestFunction,
    iterations: u32,
    secret: &[u8],
    salt: &[u8],
) -> Zeroizing<Vec<u8>> {
    let mut current = Zeroizing::new(secret.to_vec());
    for _ in 0..iterations {
        current = Zeroizing::new(digest_round(function, &current, salt));
    }
    current
}

fn digest_round(function: DigestFunction, previous: &[u8], salt: &[u8]) -> Vec<u8> {
    match function {
        DigestFunction::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(previous);
            hasher.update(salt);
            hasher.finalize().to_vec()
        }
        DigestFunction::Sha512 => {
            let mut hasher = Sha512::new();
            hasher.update(previous);
            hasher.update(salt);
            hasher.finalize().to_vec()
        }
    }
}
