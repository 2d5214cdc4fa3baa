//! Minimum recursion depth needed for each kind to reach a terminal production
//!
//! The grammar's kinds may be mutually recursive (vectors mix vectors, numbers
//! combine numbers), so a naive recursive definition does not terminate. The
//! analysis instead computes the least fixed point of
//!
//! ```text
//! steps(kind)       = min over productions p of kind: steps(p)
//! steps(production) = 0 if terminal, else 1 + max over argument kinds: steps(arg)
//! ```
//!
//! starting from "unknown" for every kind and relaxing until nothing changes.
//! This is the hypergraph generalization of shortest paths: values only ever
//! decrease and are bounded by the number of kinds, so the sweep count is
//! bounded too. Kinds still unknown at the fixed point cannot terminate.

use crate::grammar::production::{Kind, Production};
use crate::io::error::GrammarError;
use std::collections::BTreeMap;

/// Memoized steps-to-terminal values for every kind of a grammar
#[derive(Clone, Debug, Default)]
pub struct TerminationAnalyzer {
    steps: BTreeMap<Kind, u32>,
}

impl TerminationAnalyzer {
    /// Compute steps-to-terminal for every kind in the production table
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::Unterminated`] for the first kind (in kind
    /// order) whose productions can never bottom out in a terminal.
    pub fn analyze(table: &BTreeMap<Kind, Vec<Production>>) -> Result<Self, GrammarError> {
        let mut known: BTreeMap<Kind, Option<u32>> =
            table.keys().map(|&kind| (kind, None)).collect();

        let mut changed = true;
        while changed {
            changed = false;
            for (&kind, productions) in table {
                let candidate = productions
                    .iter()
                    .filter_map(|production| production_cost(production, &known))
                    .min();
                let current = known.get(&kind).copied().flatten();

                let improves = match (candidate, current) {
                    (Some(new), Some(old)) => new < old,
                    (Some(_), None) => true,
                    (None, _) => false,
                };
                if improves {
                    known.insert(kind, candidate);
                    changed = true;
                }
            }
        }

        let mut steps = BTreeMap::new();
        for (kind, value) in known {
            let value = value.ok_or(GrammarError::Unterminated { kind })?;
            steps.insert(kind, value);
        }

        Ok(Self { steps })
    }

    /// Steps-to-terminal for a kind, or `None` if the kind has no productions
    pub fn steps_to_terminal(&self, kind: Kind) -> Option<u32> {
        self.steps.get(&kind).copied()
    }

    /// Steps-to-terminal for a single production
    ///
    /// Returns `None` when an argument kind is not part of the analyzed grammar.
    pub fn production_steps(&self, production: &Production) -> Option<u32> {
        if production.is_terminal() {
            return Some(0);
        }
        production
            .args()
            .iter()
            .try_fold(0, |deepest, kind| {
                self.steps_to_terminal(*kind).map(|steps| deepest.max(steps))
            })
            .map(|deepest| deepest + 1)
    }
}

fn production_cost(production: &Production, known: &BTreeMap<Kind, Option<u32>>) -> Option<u32> {
    if production.is_terminal() {
        return Some(0);
    }
    production
        .args()
        .iter()
        .try_fold(0, |deepest, kind| {
            known
                .get(kind)
                .copied()
                .flatten()
                .map(|steps| deepest.max(steps))
        })
        .map(|deepest| deepest + 1)
}
