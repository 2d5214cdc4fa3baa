//! Production tables grouped by kind, validated once at construction

use crate::grammar::production::{Kind, Op, Production};
use crate::grammar::termination::TerminationAnalyzer;
use crate::io::error::GrammarError;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Validated grammar with memoized termination data
///
/// Productions keep their declaration order within each kind; synthesis picks
/// among them by index, so reordering changes every generated image.
#[derive(Clone, Debug)]
pub struct Grammar {
    table: BTreeMap<Kind, Vec<Production>>,
    termination: TerminationAnalyzer,
}

static REFERENCE: LazyLock<Result<Grammar, GrammarError>> =
    LazyLock::new(|| Grammar::new(reference_productions()));

impl Grammar {
    /// Build a grammar from a flat list of productions
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list is empty
    /// - A production names an argument kind that has no productions
    /// - Some kind cannot reach a terminal production
    pub fn new(productions: Vec<Production>) -> Result<Self, GrammarError> {
        if productions.is_empty() {
            return Err(GrammarError::Empty);
        }

        let mut table: BTreeMap<Kind, Vec<Production>> = BTreeMap::new();
        for production in productions {
            table.entry(production.kind()).or_default().push(production);
        }

        for production in table.values().flatten() {
            if let Some(&kind) = production.args().iter().find(|kind| !table.contains_key(*kind)) {
                return Err(GrammarError::UndefinedKind { kind });
            }
        }

        let termination = TerminationAnalyzer::analyze(&table)?;

        Ok(Self { table, termination })
    }

    /// The fixed grammar used for artwork generation
    ///
    /// Built and analyzed on first access and shared for the rest of the process.
    ///
    /// # Errors
    ///
    /// Returns the configuration error if the built-in table is malformed.
    pub fn reference() -> Result<&'static Self, GrammarError> {
        REFERENCE.as_ref().map_err(Clone::clone)
    }

    /// Productions of a kind in declaration order (empty if the kind is absent)
    pub fn productions_for(&self, kind: Kind) -> &[Production] {
        self.table
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Kinds that have at least one production
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.table.keys().copied()
    }

    /// Minimum depth needed to synthesize a kind, `None` if the kind is absent
    pub fn steps_to_terminal(&self, kind: Kind) -> Option<u32> {
        self.termination.steps_to_terminal(kind)
    }

    /// Minimum depth needed to complete a production
    pub fn production_steps(&self, production: &Production) -> Option<u32> {
        self.termination.production_steps(production)
    }
}

/// Productions of the built-in grammar in selection order
pub fn reference_productions() -> Vec<Production> {
    [
        Op::Vec3,
        Op::Mix,
        Op::X,
        Op::Y,
        Op::Random,
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Mod,
        Op::Sin,
        Op::Sqrt,
    ]
    .into_iter()
    .map(Production::from_op)
    .collect()
}
