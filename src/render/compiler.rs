//! Closure compilation of expression trees into pixel shaders
//!
//! Each node becomes a boxed closure over its compiled arguments, built by a
//! single fold over the tree. Kind and arity are checked while folding so the
//! resulting function cannot fail at evaluation time. Numeric edge cases
//! (division by zero, square roots of negatives) are left as IEEE infinities
//! and NaNs for the evaluator to sanitize.

use crate::grammar::production::{Kind, Op};
use crate::io::error::CompileError;
use crate::math::ops::{floored_mod, mix};
use crate::synthesis::expression::Expression;

type ScalarFn = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;
type VectorFn = Box<dyn Fn(f64, f64) -> [f64; 3] + Send + Sync>;

enum Compiled {
    Scalar(ScalarFn),
    Vector(VectorFn),
}

/// Executable mapping from a coordinate pair to three color components
///
/// Holds no reference to the expression it was compiled from and can be
/// shared across threads.
pub struct CompiledFn {
    body: VectorFn,
}

impl CompiledFn {
    /// Evaluate at a coordinate pair
    pub fn eval(&self, x: f64, y: f64) -> [f64; 3] {
        (self.body)(x, y)
    }
}

impl std::fmt::Debug for CompiledFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledFn").finish_non_exhaustive()
    }
}

/// Compile a vector-valued expression
///
/// # Errors
///
/// Returns an error if:
/// - The root expression is not vector-valued
/// - A node's argument count differs from its operator's arity
/// - A node's argument produces the wrong kind
/// - A random-constant template was never instantiated
pub fn compile(expression: &Expression) -> Result<CompiledFn, CompileError> {
    match expression.try_fold(&mut combine)? {
        Compiled::Vector(body) => Ok(CompiledFn { body }),
        Compiled::Scalar(_) => Err(CompileError::KindMismatch {
            op: expression.op().symbol(),
            expected: Kind::Vector,
            found: Kind::Number,
        }),
    }
}

fn combine(op: Op, args: Vec<Compiled>) -> Result<Compiled, CompileError> {
    let mut operands = Operands::new(op, args)?;

    let compiled = match op {
        Op::X => Compiled::Scalar(Box::new(|x: f64, _: f64| x)),
        Op::Y => Compiled::Scalar(Box::new(|_: f64, y: f64| y)),
        Op::Literal(value) => Compiled::Scalar(Box::new(move |_: f64, _: f64| value)),
        Op::Random => return Err(CompileError::UnboundConstant),
        Op::Add => operands.binary(|a, b| a + b)?,
        Op::Sub => operands.binary(|a, b| a - b)?,
        Op::Mul => operands.binary(|a, b| a * b)?,
        Op::Div => operands.binary(|a, b| a / b)?,
        Op::Mod => operands.binary(floored_mod)?,
        Op::Sin => operands.unary(f64::sin)?,
        Op::Sqrt => operands.unary(f64::sqrt)?,
        Op::Vec3 => {
            let r = operands.scalar()?;
            let g = operands.scalar()?;
            let b = operands.scalar()?;
            Compiled::Vector(Box::new(move |x: f64, y: f64| [r(x, y), g(x, y), b(x, y)]))
        }
        Op::Mix => {
            let from = operands.vector()?;
            let to = operands.vector()?;
            let t = operands.scalar()?;
            Compiled::Vector(Box::new(move |x: f64, y: f64| {
                mix(from(x, y), to(x, y), t(x, y))
            }))
        }
    };

    Ok(compiled)
}

// Arguments of one node, consumed in signature order
struct Operands {
    op: Op,
    found: usize,
    rest: std::vec::IntoIter<Compiled>,
}

impl Operands {
    fn new(op: Op, args: Vec<Compiled>) -> Result<Self, CompileError> {
        let expected = op.signature().len();
        if args.len() != expected {
            return Err(CompileError::ArityMismatch {
                op: op.symbol(),
                expected,
                found: args.len(),
            });
        }
        Ok(Self {
            op,
            found: args.len(),
            rest: args.into_iter(),
        })
    }

    fn take(&mut self) -> Result<Compiled, CompileError> {
        self.rest.next().ok_or(CompileError::ArityMismatch {
            op: self.op.symbol(),
            expected: self.op.signature().len(),
            found: self.found,
        })
    }

    fn scalar(&mut self) -> Result<ScalarFn, CompileError> {
        match self.take()? {
            Compiled::Scalar(f) => Ok(f),
            Compiled::Vector(_) => Err(CompileError::KindMismatch {
                op: self.op.symbol(),
                expected: Kind::Number,
                found: Kind::Vector,
            }),
        }
    }

    fn vector(&mut self) -> Result<VectorFn, CompileError> {
        match self.take()? {
            Compiled::Vector(f) => Ok(f),
            Compiled::Scalar(_) => Err(CompileError::KindMismatch {
                op: self.op.symbol(),
                expected: Kind::Vector,
                found: Kind::Number,
            }),
        }
    }

    fn unary(&mut self, f: fn(f64) -> f64) -> Result<Compiled, CompileError> {
        let arg = self.scalar()?;
        Ok(Compiled::Scalar(Box::new(move |x: f64, y: f64| f(arg(x, y)))))
    }

    fn binary(&mut self, f: fn(f64, f64) -> f64) -> Result<Compiled, CompileError> {
        let lhs = self.scalar()?;
        let rhs = self.scalar()?;
        Ok(Compiled::Scalar(Box::new(move |x: f64, y: f64| {
            f(lhs(x, y), rhs(x, y))
        })))
    }
}
