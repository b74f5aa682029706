//! Windowing primitives for rolling statistics.
//!
//! This module provides the trailing window used by the drift remover: the
//! window ending at index `i` covers the `w` values `[i - w + 1, i]` and does
//! not exist while fewer than `w` values have been seen.

// Inclusive window bounds `[left, right]` over a sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Trailing window of `window_size` values ending at `idx`.
    //
    // Returns `None` for the first `window_size - 1` positions.
    #[inline]
    pub fn trailing(idx: usize, window_size: usize) -> Option<Self> {
        debug_assert!(window_size >= 1, "trailing: window_size must be at least 1");

        if idx + 1 < window_size {
            return None;
        }

        Some(Self {
            left: idx + 1 - window_size,
            right: idx,
        })
    }

    // Number of complete trailing windows in a sequence of length `n`.
    #[inline]
    pub fn count_complete(n: usize, window_size: usize) -> usize {
        (n + 1).saturating_sub(window_size)
    }

    // Borrow the values covered by this window.
    #[inline]
    pub fn slice<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        &values[self.left..=self.right]
    }

    // Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }
}
