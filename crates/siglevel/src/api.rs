//! High-level API for leveling and drift removal.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: fluent builders for
//! both correctors, and the two column-oriented free functions
//! [`fix_piecewise`] and [`background_corrector`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Piecewise::new()` or `Drift::new()`.
//! 2. Chain configuration methods (`.lookback()`, `.window_size()`, etc.).
//! 3. Call `.build()` to obtain a corrector, then `.fit()` or `.fit_column()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{run_drift, run_piecewise};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::leveling::{connect, level_regions};
pub use crate::algorithms::segmentation::segment;
pub use crate::engine::executor::{
    discontinuity_threshold, rolling_mean, DriftConfig, PiecewiseConfig, DEFAULT_LOOKBACK,
    DEFAULT_MULTIPLIER, DEFAULT_WINDOW_SIZE,
};
pub use crate::engine::output::{DriftResult, PiecewiseResult};
pub use crate::primitives::errors::SiglevelError;
pub use crate::primitives::table::Table;

// ============================================================================
// Segmenter/Leveler
// ============================================================================

/// Fluent builder for the segmenter/leveler.
#[derive(Debug, Clone)]
pub struct PiecewiseBuilder<T> {
    /// Number of leading values used for the threshold (default 10).
    pub lookback: Option<usize>,

    /// Threshold multiplier (default 200).
    pub multiplier: Option<T>,

    /// Reject inputs shorter than the lookback (default: degrade).
    pub require_full_lookback: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for PiecewiseBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PiecewiseBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            lookback: None,
            multiplier: None,
            require_full_lookback: None,
            duplicate_param: None,
        }
    }

    /// Set how many leading values estimate the jump threshold.
    pub fn lookback(mut self, lookback: usize) -> Self {
        if self.lookback.is_some() {
            self.duplicate_param = Some("lookback");
        }
        self.lookback = Some(lookback);
        self
    }

    /// Set the factor applied to the mean leading difference.
    pub fn multiplier(mut self, multiplier: T) -> Self {
        if self.multiplier.is_some() {
            self.duplicate_param = Some("multiplier");
        }
        self.multiplier = Some(multiplier);
        self
    }

    /// Fail on inputs shorter than the lookback instead of using fewer differences.
    pub fn require_full_lookback(mut self) -> Self {
        if self.require_full_lookback.is_some() {
            self.duplicate_param = Some("require_full_lookback");
        }
        self.require_full_lookback = Some(true);
        self
    }

    /// Validate the configuration and build the corrector.
    pub fn build(self) -> Result<PiecewiseCorrector<T>, SiglevelError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = PiecewiseConfig::<T>::default();
        let config = PiecewiseConfig {
            lookback: self.lookback.unwrap_or(defaults.lookback),
            multiplier: self.multiplier.unwrap_or(defaults.multiplier),
            require_full_lookback: self
                .require_full_lookback
                .unwrap_or(defaults.require_full_lookback),
        };

        Validator::validate_lookback(config.lookback)?;
        Validator::validate_multiplier(config.multiplier)?;

        Ok(PiecewiseCorrector { config })
    }
}

/// Configured segmenter/leveler.
#[derive(Debug, Clone, Copy)]
pub struct PiecewiseCorrector<T> {
    config: PiecewiseConfig<T>,
}

impl<T: Float> PiecewiseCorrector<T> {
    /// Resolved configuration.
    pub fn config(&self) -> &PiecewiseConfig<T> {
        &self.config
    }

    /// Segment and level a sequence.
    pub fn fit(&self, values: &[T]) -> Result<PiecewiseResult<T>, SiglevelError> {
        run_piecewise(values, &self.config)
    }

    /// Segment and level one column of a table.
    pub fn fit_column(
        &self,
        table: &Table<T>,
        column: &str,
    ) -> Result<PiecewiseResult<T>, SiglevelError> {
        self.fit(table.column(column)?)
    }
}

// ============================================================================
// Drift Remover
// ============================================================================

/// Fluent builder for the drift remover.
#[derive(Debug, Clone, Default)]
pub struct DriftBuilder {
    /// Trailing window size (default 10).
    pub window_size: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl DriftBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trailing window size.
    pub fn window_size(mut self, window_size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(window_size);
        self
    }

    /// Validate the configuration and build the remover.
    pub fn build(self) -> Result<DriftRemover, SiglevelError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = DriftConfig {
            window_size: self
                .window_size
                .unwrap_or(DriftConfig::default().window_size),
        };
        Validator::validate_window_size(config.window_size)?;

        Ok(DriftRemover { config })
    }
}

/// Configured drift remover.
#[derive(Debug, Clone, Copy)]
pub struct DriftRemover {
    config: DriftConfig,
}

impl DriftRemover {
    /// Resolved configuration.
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Remove drift from a sequence.
    pub fn fit<T: Float>(&self, values: &[T]) -> Result<DriftResult<T>, SiglevelError> {
        run_drift(values, &self.config)
    }

    /// Remove drift from one column of a table.
    pub fn fit_column<T: Float>(
        &self,
        table: &Table<T>,
        column: &str,
    ) -> Result<DriftResult<T>, SiglevelError> {
        self.fit(table.column(column)?)
    }
}

// ============================================================================
// Column Functions
// ============================================================================

/// Detect jumps in `column` and level its regions into one continuous trace.
///
/// Returns the raw regions and the leveled sequence, using the default
/// lookback and multiplier.
pub fn fix_piecewise<T: Float>(
    table: &Table<T>,
    column: &str,
) -> Result<(Vec<Vec<T>>, Vec<T>), SiglevelError> {
    PiecewiseBuilder::new()
        .build()?
        .fit_column(table, column)
        .map(PiecewiseResult::into_parts)
}

/// Subtract moving-average drift from `column`.
///
/// The output equals the trailing moving average wherever a full window
/// exists and is `None` for the first `window_size - 1` positions. Use
/// [`DriftRemover`] to also obtain the drift itself.
pub fn background_corrector<T: Float>(
    table: &Table<T>,
    column: &str,
    window_size: usize,
) -> Result<Vec<Option<T>>, SiglevelError> {
    DriftBuilder::new()
        .window_size(window_size)
        .build()?
        .fit_column(table, column)
        .map(|result| result.corrected)
}
