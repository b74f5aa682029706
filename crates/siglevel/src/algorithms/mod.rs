//! Layer 3: Algorithms
//!
//! This layer implements the core logic for discontinuity segmentation,
//! region leveling, and moving-average drift removal. It is orchestrated by
//! the engine layer.

// Jump detection and region splitting.
pub mod segmentation;

// Offset chaining of regions into one trace.
pub mod leveling;

// Moving-average drift removal.
pub mod drift;
