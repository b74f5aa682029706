//! Trailing rolling mean.
//!
//! Each defined entry is the arithmetic mean of exactly the last `w` values,
//! summed directly from its window so that results do not depend on the
//! accumulation history of earlier windows. Positions with an incomplete
//! window are `None`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::Window;

// Arithmetic mean of a non-empty slice.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / T::from(values.len())?)
}

// Trailing simple moving average over `window_size` values.
//
// `window_size` must already be validated as at least 1.
pub fn trailing_means<T: Float>(values: &[T], window_size: usize) -> Vec<Option<T>> {
    debug_assert!(window_size >= 1, "trailing_means: window_size must be at least 1");

    (0..values.len())
        .map(|i| {
            let window = Window::trailing(i, window_size)?;
            debug_assert_eq!(window.len(), window_size);
            mean(window.slice(values))
        })
        .collect()
}
