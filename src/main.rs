//! CLI entry point for rendering seeded expression artworks

use clap::Parser;
use exprart::io::cli::{BatchRenderer, Cli};

fn main() -> exprart::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut renderer = BatchRenderer::new(cli);
    renderer.process()?;
    Ok(())
}
