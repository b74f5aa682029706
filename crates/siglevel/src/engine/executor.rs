//! Execution engine for leveling and drift-removal passes.
//!
//! ## Purpose
//!
//! This module orchestrates both correctors: it validates the input, runs
//! the algorithms in order, and assembles the result structures.
//!
//! ## Design notes
//!
//! * Configuration structs carry resolved parameters (defaults applied).
//! * Each run is a single pass with no state kept between calls.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Non-goals
//!
//! * This module does not resolve columns from tables (handled by the API).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::drift::remove_drift;
use crate::algorithms::leveling::connect_with_offsets;
use crate::algorithms::segmentation::segment_with_boundaries;
use crate::engine::output::{DriftResult, PiecewiseResult};
use crate::engine::validator::Validator;
use crate::math::differences::scaled_threshold;
use crate::math::rolling::trailing_means;
use crate::primitives::errors::SiglevelError;
use crate::primitives::window::Window;

// ============================================================================
// Defaults
// ============================================================================

/// Number of leading values used to estimate the jump threshold.
pub const DEFAULT_LOOKBACK: usize = 10;

/// Factor applied to the mean leading difference to form the threshold.
pub const DEFAULT_MULTIPLIER: f64 = 200.0;

/// Trailing window size of the drift remover.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration of the segmenter/leveler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseConfig<T> {
    /// Number of leading values used for the threshold.
    pub lookback: usize,

    /// Threshold multiplier.
    pub multiplier: T,

    /// Reject inputs shorter than `lookback` instead of degrading.
    pub require_full_lookback: bool,
}

impl<T: Float> Default for PiecewiseConfig<T> {
    fn default() -> Self {
        Self {
            lookback: DEFAULT_LOOKBACK,
            multiplier: T::from(DEFAULT_MULTIPLIER).unwrap_or_else(T::max_value),
            require_full_lookback: false,
        }
    }
}

/// Resolved configuration of the drift remover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriftConfig {
    /// Trailing window size.
    pub window_size: usize,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

// ============================================================================
// Threshold
// ============================================================================

/// Jump threshold: mean absolute difference of the first `lookback` values,
/// scaled by `multiplier`.
///
/// Inputs shorter than `lookback` use the differences that are available.
/// At least 2 values are required.
pub fn discontinuity_threshold<T: Float>(
    values: &[T],
    lookback: usize,
    multiplier: T,
) -> Result<T, SiglevelError> {
    Validator::validate_lookback(lookback)?;
    Validator::validate_multiplier(multiplier)?;

    scaled_threshold(values, lookback, multiplier).ok_or(SiglevelError::InsufficientData {
        got: values.len(),
        min: 2,
    })
}

// ============================================================================
// Rolling Mean
// ============================================================================

/// Trailing simple moving average over `window_size` values.
///
/// Entry `i` is the mean of `values[i + 1 - window_size..=i]`; the first
/// `window_size - 1` entries are `None`. An empty input yields an empty output.
pub fn rolling_mean<T: Float>(
    values: &[T],
    window_size: usize,
) -> Result<Vec<Option<T>>, SiglevelError> {
    Validator::validate_window_size(window_size)?;
    Ok(trailing_means(values, window_size))
}

// ============================================================================
// Executors
// ============================================================================

/// Run the segmenter/leveler over `values`.
pub fn run_piecewise<T: Float>(
    values: &[T],
    config: &PiecewiseConfig<T>,
) -> Result<PiecewiseResult<T>, SiglevelError> {
    Validator::validate_values(values, 2)?;
    if config.require_full_lookback && values.len() < config.lookback {
        return Err(SiglevelError::InsufficientData {
            got: values.len(),
            min: config.lookback,
        });
    }

    let threshold = discontinuity_threshold(values, config.lookback, config.multiplier)?;
    let segmentation = segment_with_boundaries(values, threshold);
    let (corrected, offsets) = connect_with_offsets(&segmentation.regions)?;

    debug!(
        "leveled {} values into {} region(s) with threshold {}",
        values.len(),
        segmentation.regions.len(),
        threshold.to_f64().unwrap_or(f64::NAN)
    );

    Ok(PiecewiseResult {
        regions: segmentation.regions,
        corrected,
        threshold,
        boundaries: segmentation.boundaries,
        offsets,
    })
}

/// Run the drift remover over `values`.
pub fn run_drift<T: Float>(
    values: &[T],
    config: &DriftConfig,
) -> Result<DriftResult<T>, SiglevelError> {
    Validator::validate_window_size(config.window_size)?;
    Validator::validate_finite(values)?;

    let parts = remove_drift(values, config.window_size);

    debug!(
        "removed drift from {} values with window {} ({} complete windows)",
        values.len(),
        config.window_size,
        Window::count_complete(values.len(), config.window_size)
    );

    Ok(DriftResult {
        moving_average: parts.moving_average,
        drift: parts.drift,
        corrected: parts.corrected,
        window_size: config.window_size,
    })
}
