//! CLI command definitions and handlers

pub(crate) mod analyze;
mod samples;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptforge - Prompt analysis and optimization
#[derive(Parser, Debug)]
#[command(name = "promptforge")]
#[command(
    version,
    about = "Score prompts on five quality dimensions and rewrite the weak ones",
    long_about = "Promptforge scores a prompt on clarity, specificity, structure, context, \
and creativity, then rewrites it one dimension at a time, worst first. \
Analysis is fully deterministic and runs locally with no network access.",
    after_help = "\
Examples:
  promptforge analyze -p \"Write a story about a robot\"   Analyze one prompt
  promptforge analyze -f prompts.txt -o report.json      Batch analysis to JSON
  promptforge analyze -i                                 Interactive mode
  promptforge samples                                    Print bundled sample prompts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze and optimize one or more prompts
    #[command(after_help = "\
Examples:
  promptforge analyze -p \"Explain machine learning\"     Analyze a single prompt
  promptforge analyze -p \"...\" --verbose                Include per-dimension feedback
  promptforge analyze -f prompts.txt                     One prompt per blank-line block
  promptforge analyze -f prompts.txt -o report.csv       Format inferred from extension
  promptforge analyze -p \"...\" --format json            JSON to stdout for scripting
  promptforge analyze -i                                 Read prompts from the terminal")]
    Analyze {
        /// Direct prompt to analyze
        #[arg(long, short = 'p')]
        prompt: Option<String>,

        /// Path to a file of prompts separated by blank lines
        #[arg(long, short = 'f', conflicts_with = "prompt")]
        file: Option<PathBuf>,

        /// Interactive mode: type prompts at the terminal
        #[arg(long, short = 'i', conflicts_with_all = ["prompt", "file"])]
        interactive: bool,

        /// Output format: text, json, csv (default from promptforge.toml)
        #[arg(long, value_parser = ["text", "json", "csv"])]
        format: Option<String>,

        /// Output file path (format inferred from extension unless --format is given)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Show the original prompt and per-dimension feedback
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Print the bundled sample prompts, from weakest to strongest
    Samples,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            prompt,
            file,
            interactive,
            format,
            output,
            verbose,
        } => analyze::run(
            prompt.as_deref(),
            file.as_deref(),
            interactive,
            format.as_deref(),
            output.as_deref(),
            verbose,
        ),
        Commands::Samples => samples::run(),
    }
}
