//! Synthesized expression trees and tree reductions over them

use crate::grammar::production::{Kind, Op};
use std::fmt;

/// Node of a synthesized expression: an operator and its argument sub-trees
///
/// Trees are immutable once built. Consumers reduce them with [`Expression::fold`]
/// instead of matching on structure directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    op: Op,
    args: Vec<Expression>,
}

impl Expression {
    /// Combine an operator with already-built arguments
    pub const fn new(op: Op, args: Vec<Self>) -> Self {
        Self { op, args }
    }

    /// Node without arguments
    pub const fn leaf(op: Op) -> Self {
        Self::new(op, Vec::new())
    }

    /// Operator at this node
    pub const fn op(&self) -> Op {
        self.op
    }

    /// Argument sub-trees in order
    pub fn args(&self) -> &[Self] {
        &self.args
    }

    /// Kind of value the node evaluates to
    pub const fn kind(&self) -> Kind {
        self.op.kind()
    }

    /// Nesting depth, counting a lone leaf as 1
    pub fn depth(&self) -> u32 {
        self.fold(&mut |_, depths: Vec<u32>| 1 + depths.into_iter().max().unwrap_or(0))
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.fold(&mut |_, counts: Vec<usize>| 1 + counts.into_iter().sum::<usize>())
    }

    /// Reduce the tree bottom-up, arguments before their parent
    pub fn fold<T, F>(&self, combine: &mut F) -> T
    where
        F: FnMut(Op, Vec<T>) -> T,
    {
        let reduced = self.args.iter().map(|arg| arg.fold(combine)).collect();
        combine(self.op, reduced)
    }

    /// Reduce the tree bottom-up, stopping at the first error
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `combine`.
    pub fn try_fold<T, E, F>(&self, combine: &mut F) -> Result<T, E>
    where
        F: FnMut(Op, Vec<T>) -> Result<T, E>,
    {
        let mut reduced = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            reduced.push(arg.try_fold(combine)?);
        }
        combine(self.op, reduced)
    }
}

fn render(op: Op, args: Vec<String>) -> String {
    match (op, args.as_slice()) {
        (Op::Literal(value), []) => value.to_string(),
        (Op::X | Op::Y | Op::Random, []) => op.symbol().to_string(),
        (Op::Add | Op::Sub | Op::Mul | Op::Div, [lhs, rhs]) => {
            format!("({lhs} {} {rhs})", op.symbol())
        }
        _ => format!("{}({})", op.symbol(), args.join(", ")),
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fold(&mut render))
    }
}
