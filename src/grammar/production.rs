//! Grammar categories, operators and typed production rules

use crate::math::random::UnitSource;
use std::fmt;

/// Grammar category that productions produce and arguments require
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// Three-component color value
    Vector,
    /// Scalar value
    Number,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector => write!(f, "vector"),
            Self::Number => write!(f, "number"),
        }
    }
}

/// Operation carried by a production or an expression node
///
/// `Random` only appears in production templates. Instantiating it draws a
/// value and yields `Literal`, so synthesized trees carry concrete constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    /// Horizontal coordinate input
    X,
    /// Vertical coordinate input
    Y,
    /// Template for a constant drawn uniformly from `[-1, 1)` at synthesis time
    Random,
    /// Constant baked into the tree
    Literal(f64),
    /// Scalar addition
    Add,
    /// Scalar subtraction
    Sub,
    /// Scalar multiplication
    Mul,
    /// Scalar division
    Div,
    /// Floored modulo
    Mod,
    /// Sine
    Sin,
    /// Square root
    Sqrt,
    /// Vector constructor from three scalars
    Vec3,
    /// Component-wise interpolation between two vectors by a scalar
    Mix,
}

const NO_ARGS: &[Kind] = &[];
const UNARY: &[Kind] = &[Kind::Number];
const BINARY: &[Kind] = &[Kind::Number, Kind::Number];
const VEC3_ARGS: &[Kind] = &[Kind::Number, Kind::Number, Kind::Number];
const MIX_ARGS: &[Kind] = &[Kind::Vector, Kind::Vector, Kind::Number];

impl Op {
    /// Kind of the value this operator evaluates to
    pub const fn kind(self) -> Kind {
        match self {
            Self::Vec3 | Self::Mix => Kind::Vector,
            _ => Kind::Number,
        }
    }

    /// Argument kinds the operator consumes, in order
    pub const fn signature(self) -> &'static [Kind] {
        match self {
            Self::X | Self::Y | Self::Random | Self::Literal(_) => NO_ARGS,
            Self::Sin | Self::Sqrt => UNARY,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod => BINARY,
            Self::Vec3 => VEC3_ARGS,
            Self::Mix => MIX_ARGS,
        }
    }

    /// Short symbol used in error messages and rendered text
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Random => "random",
            Self::Literal(_) => "literal",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "mod",
            Self::Sin => "sin",
            Self::Sqrt => "sqrt",
            Self::Vec3 => "vec3",
            Self::Mix => "mix",
        }
    }
}

/// One grammar rule: the kind it produces, its argument kinds and its operator
#[derive(Clone, Debug, PartialEq)]
pub struct Production {
    kind: Kind,
    args: Vec<Kind>,
    op: Op,
}

impl Production {
    /// Create a production with an explicit argument list
    ///
    /// The argument list is taken as given so that grammars of the same shape
    /// but different recursion structure can be declared.
    pub fn new(kind: Kind, args: Vec<Kind>, op: Op) -> Self {
        Self { kind, args, op }
    }

    /// Create a production whose kind and arguments follow the operator's signature
    pub fn from_op(op: Op) -> Self {
        Self::new(op.kind(), op.signature().to_vec(), op)
    }

    /// Kind this production belongs to
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Ordered argument kinds
    pub fn args(&self) -> &[Kind] {
        &self.args
    }

    /// Operator template
    pub const fn op(&self) -> Op {
        self.op
    }

    /// Whether the production takes no arguments
    pub fn is_terminal(&self) -> bool {
        self.args.is_empty()
    }

    /// Produce the operator for a concrete expression node
    ///
    /// Random constants consume exactly one draw here; every other operator
    /// is copied without touching the source.
    pub fn instantiate<R: UnitSource + ?Sized>(&self, rng: &mut R) -> Op {
        match self.op {
            Op::Random => Op::Literal(rng.next_unit().mul_add(2.0, -1.0)),
            op => op,
        }
    }
}
