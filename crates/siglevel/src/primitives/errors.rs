//! Error types for leveling and drift-removal operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while extracting a
//! column, estimating a discontinuity threshold, leveling regions, or
//! computing a rolling mean.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required counts).
//! * **Deferred**: Builder misuse is recorded and reported when `build()` is called.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Dataset errors**: Missing columns, columns of inconsistent length.
//! 2. **Input validation**: Empty input, too few points, non-finite values.
//! 3. **Parameter validation**: Window size, lookback, multiplier.
//! 4. **Algorithm guards**: Empty regions during leveling.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or partial results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for siglevel operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SiglevelError {
    /// The input sequence contains no values.
    EmptyInput,

    /// The requested column is not present in the table.
    MissingColumn(String),

    /// A column being inserted does not match the table's row count.
    MismatchedColumnLength {
        /// Name of the offending column.
        column: String,
        /// Row count of the table.
        expected: usize,
        /// Length of the rejected column.
        got: usize,
    },

    /// Number of values is below the minimum requirement.
    InsufficientData {
        /// Number of values provided.
        got: usize,
        /// Minimum required values.
        min: usize,
    },

    /// A region with no values reached the leveling stage.
    EmptyRegion,

    /// Input data contains NaN or infinite values.
    NonNumericInput(String),

    /// Rolling window must contain at least one value.
    InvalidWindowSize(usize),

    /// Threshold lookback must cover at least two values (one difference).
    InvalidLookback(usize),

    /// Threshold multiplier must be finite and non-negative.
    InvalidMultiplier(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SiglevelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::MissingColumn(name) => write!(f, "Column not found: '{name}'"),
            Self::MismatchedColumnLength {
                column,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Length mismatch: column '{column}' has {got} values, table has {expected} rows"
                )
            }
            Self::InsufficientData { got, min } => {
                write!(f, "Insufficient data: got {got} values, need at least {min}")
            }
            Self::EmptyRegion => write!(f, "Encountered an empty continuous region"),
            Self::NonNumericInput(s) => write!(f, "Non-numeric value: {s}"),
            Self::InvalidWindowSize(w) => {
                write!(f, "Invalid window_size: {w} (must be at least 1)")
            }
            Self::InvalidLookback(k) => {
                write!(f, "Invalid lookback: {k} (must be at least 2)")
            }
            Self::InvalidMultiplier(m) => {
                write!(f, "Invalid multiplier: {m} (must be finite and >= 0)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SiglevelError {}
