//! Seeded procedural art from randomly synthesized expression trees
//!
//! A seed drives a deterministic random stream that synthesizes an expression
//! from a small typed grammar, depth-bounded so it always terminates. The
//! expression is compiled into a function from `(x, y)` to three color
//! components and sampled over a pixel grid. Equal seeds always give equal
//! images, so consecutive integers form a stable, navigable sequence.

#![forbid(unsafe_code)]

/// Typed production grammar and termination analysis
pub mod grammar;
/// Input/output operations and error handling
pub mod io;
/// Random source and numeric helpers
pub mod math;
/// Compilation and pixel evaluation
pub mod render;
/// Random expression synthesis
pub mod synthesis;

pub use io::error::{ArtError, Result};
pub use render::pipeline::generate;
