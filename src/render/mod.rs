//! Compilation and pixel evaluation of synthesized expressions

/// Closure compiler for expression trees
pub mod compiler;
/// Pixel grid sampling and color sanitization
pub mod evaluator;
/// End-to-end seed to canvas pipeline
pub mod pipeline;

pub use evaluator::Canvas;
pub use pipeline::{GenerationConfig, Generator, generate};
