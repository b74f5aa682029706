//! Output types for leveling and drift-removal operations.
//!
//! ## Purpose
//!
//! This module defines [`PiecewiseResult`] and [`DriftResult`], which carry
//! every output of a correction pass, including the intermediate values a
//! caller may want to inspect or plot.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Missing values**: Rolling outputs use `Option<T>`; `None` marks a
//!   position without a complete window.
//!
//! ## Invariants
//!
//! * `corrected` has the same length as the input.
//! * `regions`, `boundaries` and `offsets` have one entry per region.
//! * All drift vectors have the same length as the input.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Piecewise Result
// ============================================================================

/// Output of the segmenter/leveler.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseResult<T> {
    /// Raw, unleveled continuous regions in input order.
    pub regions: Vec<Vec<T>>,

    /// Leveled sequence, same length as the input.
    pub corrected: Vec<T>,

    /// Jump threshold used for segmentation.
    pub threshold: T,

    /// Start index of each region in the input.
    pub boundaries: Vec<usize>,

    /// Offset added to each region (`0` for the first).
    pub offsets: Vec<T>,
}

impl<T: Float> PiecewiseResult<T> {
    /// Number of continuous regions.
    pub fn n_regions(&self) -> usize {
        self.regions.len()
    }

    /// Check if at least one jump was detected.
    pub fn has_discontinuities(&self) -> bool {
        self.regions.len() > 1
    }

    /// Number of values in the corrected sequence.
    pub fn len(&self) -> usize {
        self.corrected.len()
    }

    /// Check if the result holds no values.
    pub fn is_empty(&self) -> bool {
        self.corrected.is_empty()
    }

    /// Split into `(regions, corrected)`.
    pub fn into_parts(self) -> (Vec<Vec<T>>, Vec<T>) {
        (self.regions, self.corrected)
    }
}

impl<T: Float + Display> Display for PiecewiseResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.corrected.len())?;
        writeln!(f, "  Threshold:   {}", self.threshold)?;
        writeln!(f, "  Regions:     {}", self.regions.len())?;
        writeln!(f)?;

        writeln!(f, "Regions:")?;
        writeln!(f, "{:>8} {:>8} {:>8} {:>14}", "Region", "Start", "Length", "Offset")?;
        writeln!(f, "{:-<41}", "")?;
        for (i, region) in self.regions.iter().enumerate() {
            writeln!(
                f,
                "{:>8} {:>8} {:>8} {:>14.6}",
                i, self.boundaries[i], region.len(), self.offsets[i]
            )?;
        }

        Ok(())
    }
}

// ============================================================================
// Drift Result
// ============================================================================

/// Output of the drift remover.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftResult<T> {
    /// Trailing moving average.
    pub moving_average: Vec<Option<T>>,

    /// Estimated drift (`value - moving_average`).
    pub drift: Vec<Option<T>>,

    /// Drift-corrected values (`value - drift`).
    pub corrected: Vec<Option<T>>,

    /// Window size used for the moving average.
    pub window_size: usize,
}

impl<T: Float> DriftResult<T> {
    /// Number of positions, including missing ones.
    pub fn len(&self) -> usize {
        self.corrected.len()
    }

    /// Check if the result holds no positions.
    pub fn is_empty(&self) -> bool {
        self.corrected.is_empty()
    }

    /// Number of positions with a complete window.
    pub fn valid_len(&self) -> usize {
        self.corrected.iter().filter(|v| v.is_some()).count()
    }

    /// Corrected values at positions with a complete window.
    pub fn corrected_values(&self) -> Vec<T> {
        self.corrected.iter().flatten().copied().collect()
    }
}

// Write a possibly missing value into a fixed-width column.
fn write_cell<T: Display>(f: &mut Formatter<'_>, value: &Option<T>) -> Result {
    match value {
        Some(v) => write!(f, " {:>12.6}", v),
        None => write!(f, " {:>12}", "NaN"),
    }
}

impl<T: Float + Display> Display for DriftResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let n = self.corrected.len();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", n)?;
        writeln!(f, "  Window size: {}", self.window_size)?;
        writeln!(f, "  Valid:       {}", self.valid_len())?;
        writeln!(f)?;

        writeln!(f, "Corrected Data:")?;
        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12}",
            "Index", "Moving_Avg", "Drift", "Corrected"
        )?;
        writeln!(f, "{:-<47}", "")?;

        // Show first 10 and last 10 rows if more than 20 points
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8}", idx)?;
            write_cell(f, &self.moving_average[idx])?;
            write_cell(f, &self.drift[idx])?;
            write_cell(f, &self.corrected[idx])?;
            writeln!(f)?;
        }

        Ok(())
    }
}
