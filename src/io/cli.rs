//! Command-line interface for rendering runs of consecutive artworks

use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_DEPTH_BUDGET, DEFAULT_SEED, DEFAULT_WIDTH, OUTPUT_EXTENSION,
    OUTPUT_PREFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_canvas_as_png;
use crate::io::navigation::{Cursor, Direction};
use crate::io::progress::ProgressManager;
use crate::render::pipeline::{GenerationConfig, Generator};
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "exprart")]
#[command(
    author,
    version,
    about = "Render seeded abstract art from random expression trees"
)]
/// Command-line arguments for the artwork renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory that receives the rendered PNG files
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Index of the first artwork (any integer, negatives included)
    #[arg(short, long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i64,

    /// Start from a random index instead of --seed
    #[arg(long, conflicts_with = "seed")]
    pub random_start: bool,

    /// Number of consecutive artworks to render
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Step towards lower indices ("previous") instead of higher ones
    #[arg(short, long)]
    pub backward: bool,

    /// Width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Height in pixels (defaults to the width)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Maximum expression nesting depth
    #[arg(short, long, default_value_t = DEFAULT_DEPTH_BUDGET)]
    pub depth: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render even if the output file already exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log the synthesized expression of every artwork
    #[arg(short, long)]
    pub print_expression: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Canvas dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height.unwrap_or(self.width))
    }

    /// Navigation direction requested on the command line
    pub const fn direction(&self) -> Direction {
        if self.backward {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Generation settings derived from the arguments
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            depth_budget: self.depth,
            ..GenerationConfig::default()
        }
    }

    /// Index of the first artwork
    pub fn start_index(&self) -> i64 {
        if self.random_start {
            i64::from(rand::random::<i32>())
        } else {
            self.seed
        }
    }
}

/// Renders a run of artworks to PNG files with optional progress display
pub struct BatchRenderer {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRenderer {
    /// Create a batch renderer from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render every requested artwork
    ///
    /// Returns the paths written, in navigation order; skipped files are not included.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any artwork fails
    /// to render or save.
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"must render at least one artwork",
            ));
        }

        let generator = Generator::reference(self.cli.generation_config())?;
        let (width, height) = self.cli.dimensions();
        let cursor = Cursor::new(self.cli.start_index());
        let indices: Vec<i64> = cursor.walk(self.cli.count, self.cli.direction()).collect();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(indices.len());
        }

        let mut written = Vec::with_capacity(indices.len());
        for index in indices {
            if let Some(path) = self.process_index(&generator, index, width, height)? {
                written.push(path);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn process_index(
        &self,
        generator: &Generator<'_>,
        index: i64,
        width: u32,
        height: u32,
    ) -> Result<Option<PathBuf>> {
        let start_time = Instant::now();
        let label = Cursor::new(index).label();
        let output_path = Self::get_output_path(&self.cli.output_dir, &label);

        if let Some(ref pm) = self.progress_manager {
            pm.start_artwork(&label);
        }

        let written = if self.should_render(&output_path) {
            let expression = generator.expression(index)?;
            if self.cli.print_expression {
                info!("#{label}: {expression}");
            }

            let canvas = generator.render_expression(&expression, width, height)?;
            export_canvas_as_png(&canvas, &output_path)?;
            info!("Wrote {}", output_path.display());
            Some(output_path)
        } else {
            None
        };

        if let Some(ref pm) = self.progress_manager {
            pm.complete_artwork(start_time.elapsed());
        }

        Ok(written)
    }

    fn should_render(&self, output_path: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path.exists() {
            return true;
        }

        warn!("Skipping: {} (output exists)", output_path.display());
        false
    }

    /// Output file for an index label, e.g. `artwork_-3.png`
    pub fn get_output_path(output_dir: &Path, label: &str) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}_{label}.{OUTPUT_EXTENSION}"))
    }
}
