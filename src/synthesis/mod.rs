//! Random expression synthesis
//!
//! This module contains:
//! - The expression tree and its folds (depth, node count, text rendering)
//! - The depth-bounded synthesizer that draws trees from a grammar

/// Depth-bounded synthesizer
pub mod builder;
/// Expression trees and reductions
pub mod expression;

pub use builder::Synthesizer;
pub use expression::Expression;
