//! In-memory tabular dataset with named numeric columns.
//!
//! ## Purpose
//!
//! This module provides [`Table`], the minimal row-by-column container the
//! correctors read their input from. Loading data (CSV, databases) is left to
//! the caller; the table only stores columns and resolves them by name.
//!
//! ## Invariants
//!
//! * Every column has exactly `n_rows()` values.
//! * Column order is insertion order; re-inserting a name replaces in place.
//!
//! ## Non-goals
//!
//! * This module does not parse files or perform type conversion.
//! * This module does not validate that values are finite.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// Internal dependencies
use crate::primitives::errors::SiglevelError;

// ============================================================================
// Table
// ============================================================================

/// Ordered collection of equally long, named numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    columns: Vec<(String, Vec<T>)>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Table<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Insert a column, replacing any existing column with the same name.
    ///
    /// The first column fixes the row count of the table.
    pub fn insert(&mut self, name: &str, values: Vec<T>) -> Result<(), SiglevelError> {
        let replacing = self.position(name);

        // A lone column may be replaced by one of any length.
        let constrained = match replacing {
            Some(_) => self.columns.len() > 1,
            None => !self.columns.is_empty(),
        };
        if constrained && values.len() != self.n_rows() {
            return Err(SiglevelError::MismatchedColumnLength {
                column: String::from(name),
                expected: self.n_rows(),
                got: values.len(),
            });
        }

        match replacing {
            Some(idx) => self.columns[idx].1 = values,
            None => self.columns.push((String::from(name), values)),
        }
        Ok(())
    }

    /// Builder-style variant of [`Table::insert`].
    pub fn with_column(mut self, name: &str, values: Vec<T>) -> Result<Self, SiglevelError> {
        self.insert(name, values)?;
        Ok(self)
    }

    /// Borrow the values of the named column.
    pub fn column(&self, name: &str) -> Result<&[T], SiglevelError> {
        self.position(name)
            .map(|idx| self.columns[idx].1.as_slice())
            .ok_or_else(|| SiglevelError::MissingColumn(String::from(name)))
    }

    /// Check whether a column with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Number of rows (0 for a table without columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|(n, _)| n == name)
    }
}
