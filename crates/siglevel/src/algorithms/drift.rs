//! Moving-average drift removal.
//!
//! ## Purpose
//!
//! This module estimates background drift as the deviation of each value
//! from its trailing moving average and subtracts it from the raw values.
//!
//! ## Key concepts
//!
//! * **Drift**: `drift[i] = v[i] - ma[i]`.
//! * **Corrected**: `out[i] = v[i] - drift[i]`, which is algebraically
//!   `ma[i]`. The drift is therefore discarded and the output reproduces the
//!   moving average. This behaviour is kept as-is; `drift` is exposed so a
//!   detail-preserving correction can be layered on top.
//! * **Missing values**: Positions without a complete window are `None` in
//!   every output.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::rolling::trailing_means;

/// Per-position outputs of a drift removal pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftComponents<T> {
    /// Trailing moving average.
    pub moving_average: Vec<Option<T>>,

    /// Raw value minus moving average.
    pub drift: Vec<Option<T>>,

    /// Raw value minus drift.
    pub corrected: Vec<Option<T>>,
}

/// Compute moving average, drift and corrected values for `values`.
///
/// `window_size` must be at least 1.
pub fn remove_drift<T: Float>(values: &[T], window_size: usize) -> DriftComponents<T> {
    let moving_average = trailing_means(values, window_size);

    let drift: Vec<Option<T>> = values
        .iter()
        .zip(&moving_average)
        .map(|(&v, ma)| ma.map(|m| v - m))
        .collect();

    let corrected = values
        .iter()
        .zip(&drift)
        .map(|(&v, d)| d.map(|d| v - d))
        .collect();

    DriftComponents {
        moving_average,
        drift,
        corrected,
    }
}
