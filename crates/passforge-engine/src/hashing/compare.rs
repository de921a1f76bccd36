//! Timing-safe byte comparison.

use std::hint::black_box;

/// Constant-time byte comparison to prevent timing side channels.
///
/// Every byte pair is visited regardless of where the first difference
/// lies. Lengths are not secret and are compared up front.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result = black_box(result | (x ^ y));
    }
    result == 0
}
