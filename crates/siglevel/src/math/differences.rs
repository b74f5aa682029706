//! Consecutive-difference statistics.
//!
//! ## Purpose
//!
//! This module computes the absolute differences between neighbouring values
//! and the scaled mean difference used as a jump threshold.
//!
//! ## Key concepts
//!
//! * **Lookback**: Only the first `lookback` values contribute, giving at most
//!   `lookback - 1` differences. Shorter inputs use whatever differences exist.
//! * **Scaling**: The mean difference is multiplied by a fixed factor so that
//!   ordinary sample-to-sample noise never registers as a jump.

// External dependencies
use num_traits::Float;

// Absolute difference between neighbouring values.
#[inline]
pub fn abs_diff<T: Float>(prev: T, next: T) -> T {
    (next - prev).abs()
}

// Mean absolute consecutive difference, or `None` when fewer than 2 values.
pub fn mean_abs_diff<T: Float>(values: &[T]) -> Option<T> {
    if values.len() < 2 {
        return None;
    }

    let mut sum = T::zero();
    for pair in values.windows(2) {
        sum = sum + abs_diff(pair[0], pair[1]);
    }

    let count = T::from(values.len() - 1)?;
    Some(sum / count)
}

// Jump threshold: `mean_abs_diff(values[..lookback]) * multiplier`.
pub fn scaled_threshold<T: Float>(values: &[T], lookback: usize, multiplier: T) -> Option<T> {
    let head = &values[..lookback.min(values.len())];
    mean_abs_diff(head).map(|avg| avg * multiplier)
}
