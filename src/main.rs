mod cli;
mod config;
mod error;
mod extractor;
mod parser;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;

fn main() -> Result<()> {
    // Initialize tracing on stderr - stdout carries only the extracted text.
    // Only warnings by default, use RUST_LOG=debug for per-page detail
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load().context("Failed to load configuration")?;
    let path = config.resolve_path(cli.path);
    let engine = config.resolve_engine(cli.engine);

    // Extraction errors are printed, not returned, so they never change the exit status
    extractor::extract_and_print(&path, engine)?;

    Ok(())
}
