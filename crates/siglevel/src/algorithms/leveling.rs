//! Region leveling.
//!
//! Leveling shifts a region by a constant offset so that its first value
//! equals the last value of the already-leveled sequence before it. Offsets
//! chain: each region is placed relative to the *leveled* end of its
//! predecessor, not its raw end.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SiglevelError;

/// Append `next` to `leveled`, shifted so it starts at `leveled`'s last value.
///
/// Returns the offset that was applied.
pub fn extend_leveled<T: Float>(leveled: &mut Vec<T>, next: &[T]) -> Result<T, SiglevelError> {
    let (&anchor, &start) = match (leveled.last(), next.first()) {
        (Some(anchor), Some(start)) => (anchor, start),
        _ => return Err(SiglevelError::EmptyRegion),
    };

    let offset = anchor - start;
    leveled.extend(next.iter().map(|&v| v + offset));
    Ok(offset)
}

/// Level `next` onto `leveled`, returning a new sequence.
///
/// Neither input is modified.
pub fn level_regions<T: Float>(leveled: &[T], next: &[T]) -> Result<Vec<T>, SiglevelError> {
    let mut out = Vec::with_capacity(leveled.len() + next.len());
    out.extend_from_slice(leveled);
    extend_leveled(&mut out, next)?;
    Ok(out)
}

/// Fold all regions left to right into one leveled sequence.
///
/// Also returns the offset applied to each region (`0` for the first).
pub fn connect_with_offsets<T: Float>(
    regions: &[Vec<T>],
) -> Result<(Vec<T>, Vec<T>), SiglevelError> {
    let (first, rest) = regions.split_first().ok_or(SiglevelError::EmptyRegion)?;
    if first.is_empty() {
        return Err(SiglevelError::EmptyRegion);
    }

    let total = regions.iter().map(Vec::len).sum();
    let mut corrected = Vec::with_capacity(total);
    corrected.extend_from_slice(first);

    let mut offsets = Vec::with_capacity(regions.len());
    offsets.push(T::zero());
    for region in rest {
        offsets.push(extend_leveled(&mut corrected, region)?);
    }

    Ok((corrected, offsets))
}

/// Fold all regions left to right into one leveled sequence.
pub fn connect<T: Float>(regions: &[Vec<T>]) -> Result<Vec<T>, SiglevelError> {
    connect_with_offsets(regions).map(|(corrected, _)| corrected)
}
