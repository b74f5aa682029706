//! Input validation for corrector configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for corrector parameters and
//! input data. It checks requirements such as minimum lengths, finite values,
//! and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SiglevelError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for corrector configuration and input data.
///
/// All methods return `Result<(), SiglevelError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a sequence: non-empty, at least `min` values, all finite.
    pub fn validate_values<T: Float>(values: &[T], min: usize) -> Result<(), SiglevelError> {
        // Check 1: Non-empty
        if values.is_empty() {
            return Err(SiglevelError::EmptyInput);
        }

        // Check 2: Sufficient points
        if values.len() < min {
            return Err(SiglevelError::InsufficientData {
                got: values.len(),
                min,
            });
        }

        // Check 3: All values finite
        Self::validate_finite(values)
    }

    /// Validate that every value is finite.
    pub fn validate_finite<T: Float>(values: &[T]) -> Result<(), SiglevelError> {
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SiglevelError::NonNumericInput(format!(
                "value[{}]={}",
                i,
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the rolling window size.
    pub fn validate_window_size(window_size: usize) -> Result<(), SiglevelError> {
        if window_size == 0 {
            return Err(SiglevelError::InvalidWindowSize(window_size));
        }
        Ok(())
    }

    /// Validate the threshold lookback (number of leading values).
    pub fn validate_lookback(lookback: usize) -> Result<(), SiglevelError> {
        if lookback < 2 {
            return Err(SiglevelError::InvalidLookback(lookback));
        }
        Ok(())
    }

    /// Validate the threshold multiplier.
    pub fn validate_multiplier<T: Float>(multiplier: T) -> Result<(), SiglevelError> {
        if !multiplier.is_finite() || multiplier < T::zero() {
            return Err(SiglevelError::InvalidMultiplier(
                multiplier.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SiglevelError> {
        if let Some(param) = duplicate_param {
            return Err(SiglevelError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
