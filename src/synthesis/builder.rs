//! Depth-bounded random expression synthesis over a validated grammar

use crate::grammar::production::{Kind, Production};
use crate::grammar::table::Grammar;
use crate::io::error::{ArtError, GrammarError, Result};
use crate::math::random::UnitSource;
use crate::synthesis::expression::Expression;

/// Builds random expressions whose depth never exceeds the given budget
///
/// At every node only productions that can still terminate within the
/// remaining budget are eligible, so a valid root budget guarantees that
/// synthesis bottoms out in terminals.
#[derive(Clone, Copy, Debug)]
pub struct Synthesizer<'g> {
    grammar: &'g Grammar,
}

impl<'g> Synthesizer<'g> {
    /// Create a synthesizer over a grammar
    pub const fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Grammar this synthesizer draws productions from
    pub const fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Smallest depth budget that can synthesize the kind
    ///
    /// # Errors
    ///
    /// Returns an error if the kind has no productions in the grammar.
    pub fn minimum_budget(&self, kind: Kind) -> Result<u32> {
        self.grammar
            .steps_to_terminal(kind)
            .map(|steps| steps + 1)
            .ok_or(ArtError::Grammar(GrammarError::UndefinedKind { kind }))
    }

    /// Synthesize a root expression after checking the budget up front
    ///
    /// No random value is consumed when the budget is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind is absent from the grammar or the budget
    /// is below [`Synthesizer::minimum_budget`].
    pub fn synthesize_root<R: UnitSource + ?Sized>(
        &self,
        kind: Kind,
        depth_budget: u32,
        rng: &mut R,
    ) -> Result<Expression> {
        let required = self.minimum_budget(kind)?;
        if depth_budget < required {
            return Err(ArtError::BudgetExhausted {
                kind,
                budget: depth_budget,
                required,
            });
        }
        self.synthesize(kind, depth_budget, rng)
    }

    /// Synthesize an expression of a kind within a depth budget
    ///
    /// Draw order is fixed: one draw to pick the production, one more if it
    /// is a random constant, then the arguments left to right.
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::BudgetExhausted`] if no production of the kind can
    /// terminate within the budget.
    pub fn synthesize<R: UnitSource + ?Sized>(
        &self,
        kind: Kind,
        depth_budget: u32,
        rng: &mut R,
    ) -> Result<Expression> {
        let candidates = self.candidates(kind, depth_budget);
        if candidates.is_empty() {
            return Err(self.exhausted(kind, depth_budget));
        }

        let Some(production) = pick(&candidates, rng.next_unit()) else {
            return Err(self.exhausted(kind, depth_budget));
        };
        let op = production.instantiate(rng);

        let mut args = Vec::with_capacity(production.args().len());
        for &arg in production.args() {
            args.push(self.synthesize(arg, depth_budget - 1, rng)?);
        }

        Ok(Expression::new(op, args))
    }

    fn exhausted(&self, kind: Kind, depth_budget: u32) -> ArtError {
        match self.minimum_budget(kind) {
            Ok(required) => ArtError::BudgetExhausted {
                kind,
                budget: depth_budget,
                required,
            },
            Err(error) => error,
        }
    }

    /// Productions of a kind that can complete within the budget, in order
    pub fn candidates(&self, kind: Kind, depth_budget: u32) -> Vec<&'g Production> {
        self.grammar
            .productions_for(kind)
            .iter()
            .filter(|production| {
                self.grammar
                    .production_steps(production)
                    .is_some_and(|steps| steps < depth_budget)
            })
            .collect()
    }
}

// floor(unit * count), clamped in case the source hands back exactly 1.0
fn pick<'a>(candidates: &[&'a Production], unit: f64) -> Option<&'a Production> {
    let last = candidates.len().checked_sub(1)?;
    let index = ((unit * candidates.len() as f64).floor() as usize).min(last);
    candidates.get(index).copied()
}
