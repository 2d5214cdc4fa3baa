//! Seed-to-pixels pipeline: synthesize, compile, evaluate

use crate::grammar::production::Kind;
use crate::grammar::table::Grammar;
use crate::io::configuration::{
    DEFAULT_DEPTH_BUDGET, DEFAULT_ROOT_KIND, MAX_DEPTH_BUDGET, SAMPLE_EPSILON,
};
use crate::io::error::{ArtError, Result, invalid_parameter};
use crate::math::random::ParkMiller;
use crate::render::compiler::compile;
use crate::render::evaluator::{Canvas, render, validate_dimensions};
use crate::synthesis::builder::Synthesizer;
use crate::synthesis::expression::Expression;
use log::debug;

/// Parameters controlling synthesis and sampling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Kind of the expression at the root of every artwork
    pub root: Kind,
    /// Maximum nesting depth of synthesized expressions
    pub depth_budget: u32,
    /// Offset added to both coordinates before evaluation
    pub epsilon: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT_KIND,
            depth_budget: DEFAULT_DEPTH_BUDGET,
            epsilon: SAMPLE_EPSILON,
        }
    }
}

/// Turns seeds into expressions and canvases over a fixed grammar
#[derive(Clone, Copy, Debug)]
pub struct Generator<'g> {
    synthesizer: Synthesizer<'g>,
    config: GenerationConfig,
}

impl Generator<'static> {
    /// Generator over the built-in grammar
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in grammar is malformed or the
    /// configuration is rejected by [`Generator::new`].
    pub fn reference(config: GenerationConfig) -> Result<Self> {
        Self::new(Grammar::reference()?, config)
    }
}

impl<'g> Generator<'g> {
    /// Create a generator, validating the configuration against the grammar
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root kind has no productions
    /// - The depth budget is too small for the root kind to terminate
    /// - The depth budget exceeds [`MAX_DEPTH_BUDGET`]
    /// - The sampling offset is not finite
    pub fn new(grammar: &'g Grammar, config: GenerationConfig) -> Result<Self> {
        let synthesizer = Synthesizer::new(grammar);

        let required = synthesizer.minimum_budget(config.root)?;
        if config.depth_budget < required {
            return Err(ArtError::BudgetExhausted {
                kind: config.root,
                budget: config.depth_budget,
                required,
            });
        }

        if config.depth_budget > MAX_DEPTH_BUDGET {
            return Err(invalid_parameter(
                "depth_budget",
                &config.depth_budget,
                &format!("must not exceed {MAX_DEPTH_BUDGET}"),
            ));
        }

        if !config.epsilon.is_finite() {
            return Err(invalid_parameter(
                "epsilon",
                &config.epsilon,
                &"must be a finite number",
            ));
        }

        Ok(Self {
            synthesizer,
            config,
        })
    }

    /// Configuration in use
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Synthesize the expression for a seed
    ///
    /// A fresh random stream is created for every call, so equal seeds always
    /// give equal expressions.
    ///
    /// # Errors
    ///
    /// Returns an error if synthesis exhausts its depth budget.
    pub fn expression(&self, seed: i64) -> Result<Expression> {
        let mut rng = ParkMiller::new(seed);
        let expression =
            self.synthesizer
                .synthesize_root(self.config.root, self.config.depth_budget, &mut rng)?;
        debug!(
            "seed {seed}: {} nodes, depth {}: {expression}",
            expression.node_count(),
            expression.depth()
        );
        Ok(expression)
    }

    /// Compile and sample an already synthesized expression
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the expression does
    /// not compile.
    pub fn render_expression(
        &self,
        expression: &Expression,
        width: u32,
        height: u32,
    ) -> Result<Canvas> {
        validate_dimensions(width, height)?;
        let function = compile(expression)?;
        render(&function, width, height, self.config.epsilon)
    }

    /// Render the artwork for a seed
    ///
    /// Dimensions are checked before any synthesis work is done.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid, or synthesis or
    /// compilation fails.
    pub fn render(&self, seed: i64, width: u32, height: u32) -> Result<Canvas> {
        validate_dimensions(width, height)?;
        let expression = self.expression(seed)?;
        self.render_expression(&expression, width, height)
    }
}

/// Render the artwork for a seed with the default configuration
///
/// Returns `width * height * 4` bytes of row-major RGBA with opaque alpha.
///
/// # Errors
///
/// Returns an error if `width` or `height` is zero or larger than the
/// supported maximum.
pub fn generate(seed: i64, width: u32, height: u32) -> Result<Vec<u8>> {
    let generator = Generator::reference(GenerationConfig::default())?;
    Ok(generator.render(seed, width, height)?.into_rgba())
}
