//! Generation constants and runtime configuration defaults

use crate::grammar::production::Kind;

// Synthesis settings
/// Kind synthesized at the root of every artwork
pub const DEFAULT_ROOT_KIND: Kind = Kind::Vector;
/// Maximum expression nesting depth
pub const DEFAULT_DEPTH_BUDGET: u32 = 5;

// Keeps exact grid coordinates such as the origin off division singularities
/// Offset added to both sampling coordinates
pub const SAMPLE_EPSILON: f64 = 1e-5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_DIMENSION: usize = 10_000;
// Expression size grows exponentially with depth
/// Maximum allowed depth budget
pub const MAX_DEPTH_BUDGET: u32 = 24;

// Default values for configurable parameters
/// Index shown first, before any navigation
pub const DEFAULT_SEED: i64 = 0;
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 512;
/// Number of consecutive artworks rendered per run
pub const DEFAULT_COUNT: usize = 1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Prefix of rendered file names, followed by the index label
pub const OUTPUT_PREFIX: &str = "artwork";
/// Extension of rendered files
pub const OUTPUT_EXTENSION: &str = "png";
