//! Discontinuity detection and region segmentation.
//!
//! ## Purpose
//!
//! This module splits a sequence into continuous regions: maximal runs in
//! which every consecutive absolute difference stays within a threshold.
//!
//! ## Key concepts
//!
//! * **Inclusive comparison**: A difference exactly equal to the threshold
//!   does not start a new region.
//! * **Partition**: Every index belongs to exactly one region and the regions,
//!   concatenated in order, reproduce the input.
//! * **Boundaries**: The start index of each region in the original input.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness. A NaN difference never
//!   satisfies `<=`, so an unvalidated NaN would always open a new region.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::math::differences::abs_diff;

/// Regions of a sequence together with their start indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation<T> {
    /// Raw, unleveled regions in input order.
    pub regions: Vec<Vec<T>>,

    /// Start index of each region in the input.
    pub boundaries: Vec<usize>,
}

/// Split `values` into continuous regions and record where each one starts.
///
/// Returns no regions for an empty input.
pub fn segment_with_boundaries<T: Float>(values: &[T], threshold: T) -> Segmentation<T> {
    let Some((&first, rest)) = values.split_first() else {
        return Segmentation {
            regions: Vec::new(),
            boundaries: Vec::new(),
        };
    };

    let mut regions = Vec::new();
    let mut boundaries = vec![0];
    let mut current = vec![first];
    let mut prev = first;

    for (offset, &value) in rest.iter().enumerate() {
        let idx = offset + 1;
        let diff = abs_diff(prev, value);
        if diff <= threshold {
            current.push(value);
        } else {
            trace!(
                "discontinuity at index {idx}: |diff| = {} exceeds threshold {}",
                diff.to_f64().unwrap_or(f64::NAN),
                threshold.to_f64().unwrap_or(f64::NAN)
            );
            regions.push(core::mem::replace(&mut current, vec![value]));
            boundaries.push(idx);
        }
        prev = value;
    }
    regions.push(current);

    Segmentation {
        regions,
        boundaries,
    }
}

/// Split `values` into continuous regions.
pub fn segment<T: Float>(values: &[T], threshold: T) -> Vec<Vec<T>> {
    segment_with_boundaries(values, threshold).regions
}
