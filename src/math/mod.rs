//! Mathematical utilities for synthesis and evaluation

/// Floored modulo and interpolation helpers
pub mod ops;
/// Seeded deterministic random source
pub mod random;
