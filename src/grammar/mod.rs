//! Typed production grammar and its termination analysis
//!
//! This module contains:
//! - Kinds, operators and production rules
//! - Validated production tables, including the built-in artwork grammar
//! - The steps-to-terminal analysis that bounds synthesis

/// Kinds, operators and production rules
pub mod production;
/// Validated production tables
pub mod table;
/// Least-fixed-point steps-to-terminal analysis
pub mod termination;

pub use production::{Kind, Op, Production};
pub use table::Grammar;
