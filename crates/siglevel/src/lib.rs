//! # siglevel — Piecewise leveling and drift removal for numeric series
//!
//! Two independent cleanup routines for a numeric column of tabular
//! time-series data:
//!
//! - **Segmenter/Leveler**: detects abrupt jumps, splits the series into
//!   continuous regions, and shifts each region so it starts where the
//!   previous (already leveled) one ends.
//! - **Drift Remover**: computes a trailing moving average, treats the
//!   deviation from it as drift, and subtracts that drift from the raw values.
//!
//! ## Quick Start
//!
//! ```rust
//! use siglevel::prelude::*;
//!
//! // Nine small steps, then a jump of ~100 that persists.
//! let signal: Vec<f64> = vec![
//!     0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 100.9, 101.0, 101.1,
//! ];
//! let table = Table::new().with_column("signal", signal)?;
//!
//! let (regions, corrected) = fix_piecewise(&table, "signal")?;
//!
//! assert_eq!(regions.len(), 2);
//! assert_eq!(corrected.len(), 13);
//! assert!((corrected[10] - 0.9).abs() < 1e-9);
//! # Result::<(), SiglevelError>::Ok(())
//! ```
//!
//! ### Configured correctors
//!
//! ```rust
//! use siglevel::prelude::*;
//!
//! let values = vec![10.0, 20.0, 30.0, 40.0, 50.0];
//!
//! let remover = Drift::new().window_size(3).build()?;
//! let result = remover.fit(&values)?;
//!
//! assert_eq!(result.corrected, vec![None, None, Some(20.0), Some(30.0), Some(40.0)]);
//! assert_eq!(result.drift[2], Some(10.0));
//!
//! let leveler = Piecewise::new().lookback(5).multiplier(50.0).build()?;
//! let result = leveler.fit(&values)?;
//! assert!(!result.has_discontinuities());
//! # Result::<(), SiglevelError>::Ok(())
//! ```
//!
//! ## Drift remover identity
//!
//! The drift remover computes `out = v - (v - ma)`, which is exactly the
//! moving average `ma`. This behaviour is kept as-is; the
//! drift itself is available on [`prelude::DriftResult`] for callers that
//! need a detail-preserving correction.
//!
//! ## Logging
//!
//! Each pass emits `debug` summaries and per-jump `trace` records through the
//! [`log`](https://docs.rs/log) facade. Install any logger to see them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - segmentation, leveling, drift removal.
mod algorithms;

// Layer 4: Engine - validation, orchestration, and results.
mod engine;

// High-level fluent API.
mod api;

pub use api::{background_corrector, fix_piecewise};

// Standard siglevel prelude.
pub mod prelude {
    pub use crate::api::{
        background_corrector, connect, discontinuity_threshold, fix_piecewise, level_regions,
        rolling_mean, segment, DriftBuilder as Drift, DriftConfig, DriftRemover, DriftResult,
        PiecewiseBuilder as Piecewise, PiecewiseConfig, PiecewiseCorrector, PiecewiseResult,
        SiglevelError, Table, DEFAULT_LOOKBACK, DEFAULT_MULTIPLIER, DEFAULT_WINDOW_SIZE,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
