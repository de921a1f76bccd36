//! Unbiased integer draws on top of a [`RandomSource`].

use passforge_core::error::ForgeError;
use passforge_core::result::ForgeResult;
use passforge_core::traits::RandomSource;

/// Draws an index uniformly from `0..bound`.
///
/// Raw draws are 32-bit. Values at or above the largest multiple of
/// `bound` that fits in 2^32 are rejected and redrawn, so no residue is
/// favoured. For power-of-two bounds nothing is ever rejected.
pub fn uniform_index(source: &dyn RandomSource, bound: usize) -> ForgeResult<usize> {
    if bound == 0 {
        return Err(ForgeError::invalid_parameters(
            "cannot draw from an empty range",
        ));
    }
    if bound == 1 {
        return Ok(0);
    }
    let bound = u64::try_from(bound)
        .ok()
        .filter(|b| *b <= u64::from(u32::MAX))
        .ok_or_else(|| ForgeError::invalid_parameters("range too large for a 32-bit draw"))?;

    let space = 1u64 << 32;
    let limit = space - (space % bound);
    loop {
        let draw = u64::from(source.next_u32()?);
        if draw < limit {
            return Ok((draw % bound) as usize);
        }
    }
}

/// Draws a value uniformly from the inclusive range `low..=high`.
pub fn uniform_in_range(source: &dyn RandomSource, low: usize, high: usize) -> ForgeResult<usize> {
    if low > high {
        return Err(ForgeError::invalid_parameters(format!(
            "empty range {low}..={high}"
        )));
    }
    Ok(low + uniform_index(source, high - low + 1)?)
}

/// Shuffles `items` in place with Fisher–Yates, drawing each swap index
/// through [`uniform_index`].
pub fn shuffle<T>(source: &dyn RandomSource, items: &mut [T]) -> ForgeResult<()> {
    for i in (1..items.len()).rev() {
        let j = uniform_index(source, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
