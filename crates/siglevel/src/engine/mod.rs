//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates each correction pass by coordinating validation,
//! math, and algorithms, and assembles the result types.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution of both correctors.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for correction passes.
pub mod output;
