//! Promptforge - rule-based prompt analysis and optimization CLI
//!
//! Scores prompts on five quality dimensions (clarity, specificity,
//! structure, context, creativity), rewrites weak prompts, and explains
//! the changes. Fully deterministic, fully local.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = promptforge::cli::Cli::parse();
    promptforge::cli::run(cli)
}
