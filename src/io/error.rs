//! Error types for grammar validation, synthesis, compilation and export

use crate::grammar::production::Kind;
use std::fmt;
use std::path::PathBuf;

/// Grammar configuration failures detected at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The grammar declares no productions at all
    Empty,

    /// A production references an argument kind with no productions of its own
    UndefinedKind {
        /// The kind that is referenced but never produced
        kind: Kind,
    },

    /// No terminal production is reachable from this kind in any finite depth
    Unterminated {
        /// The kind whose steps-to-terminal is infinite
        kind: Kind,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grammar has no productions"),
            Self::UndefinedKind { kind } => {
                write!(f, "kind '{kind}' is used as an argument but has no productions")
            }
            Self::Unterminated { kind } => {
                write!(f, "kind '{kind}' cannot reach a terminal production")
            }
        }
    }
}

impl std::error::Error for GrammarError {}

/// Structural problems found while compiling an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Node has the wrong number of arguments for its operator
    ArityMismatch {
        /// Operator symbol
        op: &'static str,
        /// Arguments the operator takes
        expected: usize,
        /// Arguments the node carries
        found: usize,
    },

    /// A sub-expression produces a different kind than its position requires
    KindMismatch {
        /// Operator symbol of the offending node
        op: &'static str,
        /// Kind required at this position
        expected: Kind,
        /// Kind the sub-expression produces
        found: Kind,
    },

    /// A random-constant template reached the compiler without a drawn value
    UnboundConstant,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch {
                op,
                expected,
                found,
            } => write!(
                f,
                "operator '{op}' takes {expected} arguments but was given {found}"
            ),
            Self::KindMismatch {
                op,
                expected,
                found,
            } => write!(f, "operator '{op}' expected a {expected} but found a {found}"),
            Self::UnboundConstant => {
                write!(f, "random constant was never drawn during synthesis")
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Main error type for all generation operations
#[derive(Debug)]
pub enum ArtError {
    /// The grammar is malformed and cannot be used for synthesis
    Grammar(GrammarError),

    /// Synthesis was asked for a kind with too little depth left to terminate
    ///
    /// This is a precondition violation: root budgets are validated before
    /// synthesis starts, so reaching it means a caller bypassed that check.
    BudgetExhausted {
        /// Kind being synthesized
        kind: Kind,
        /// Depth budget that was available
        budget: u32,
        /// Smallest budget that would have succeeded
        required: u32,
    },

    /// Expression could not be turned into an executable function
    Compile(CompileError),

    /// Caller-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grammar(error) => write!(f, "Grammar configuration error: {error}"),
            Self::BudgetExhausted {
                kind,
                budget,
                required,
            } => {
                write!(
                    f,
                    "Depth budget {budget} is too small to synthesize a {kind} (needs at least {required})"
                )
            }
            Self::Compile(error) => write!(f, "Compilation failed: {error}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grammar(source) => Some(source),
            Self::Compile(source) => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, ArtError>;

impl From<GrammarError> for ArtError {
    fn from(err: GrammarError) -> Self {
        Self::Grammar(err)
    }
}

impl From<CompileError> for ArtError {
    fn from(err: CompileError) -> Self {
        Self::Compile(err)
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ArtError {
    ArtError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
