//! Analyze command implementation
//!
//! The command runs the same pipeline for every input source:
//! 1. Collect prompts (direct flag, file split on blank lines, or
//!    interactive input)
//! 2. Validate each prompt, skipping invalid ones in batch mode
//! 3. Score, optimize, and assemble a report per prompt
//! 4. Display to the terminal and render to a file when requested

use crate::config::{load_config, Config};
use crate::models::{DetailedFeedback, Dimension, PromptReport};
use crate::optimize::OptimizationEngine;
use crate::reporters::{self, OutputFormat};
use crate::scoring::ScoreEngine;
use crate::validate::validate_prompt;

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// One analyzed prompt: the report plus the per-dimension notes that
/// only verbose terminal output shows.
struct Analyzed {
    report: PromptReport,
    detailed: DetailedFeedback,
}

pub(crate) fn run(
    prompt: Option<&str>,
    file: Option<&Path>,
    interactive: bool,
    format: Option<&str>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let config = load_config(Path::new("."));
    let verbose = verbose || config.verbose;
    let format = resolve_format(format, output, &config)?;

    if interactive {
        return run_interactive(verbose);
    }

    let scorer = ScoreEngine::new();
    let optimizer = OptimizationEngine::new();

    let analyzed = if let Some(path) = file {
        analyze_file(&scorer, &optimizer, path, verbose)?
    } else if let Some(prompt) = prompt {
        validate_prompt(prompt)?;
        let one = analyze_one(&scorer, &optimizer, prompt);
        display(&one, verbose);
        vec![one]
    } else {
        bail!("no input provided. Use --prompt, --file, or --interactive");
    };

    let reports: Vec<PromptReport> = analyzed.into_iter().map(|a| a.report).collect();

    if let Some(path) = output {
        let rendered = reporters::render(&reports, format)?;
        std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Analysis report saved to: {}", path.display());
    } else if format != OutputFormat::Text {
        // Machine-readable stdout for scripting
        print!("{}", reporters::render(&reports, format)?);
    }

    Ok(())
}

/// Pick the output format: explicit flag, then output file extension,
/// then the configured default.
fn resolve_format(
    flag: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) -> Result<OutputFormat> {
    if let Some(flag) = flag {
        return OutputFormat::from_str(flag);
    }
    if let Some(path) = output {
        return Ok(reporters::format_for_path(path));
    }
    Ok(OutputFormat::from_str(&config.output_format).unwrap_or_else(|e| {
        warn!("Invalid output_format in config: {e}");
        OutputFormat::Text
    }))
}

fn analyze_one(scorer: &ScoreEngine, optimizer: &OptimizationEngine, prompt: &str) -> Analyzed {
    let analysis = scorer.analyze(prompt);
    let result = optimizer.optimize(prompt, &analysis.scores);
    Analyzed {
        report: PromptReport::new(prompt, &analysis, result),
        detailed: analysis.detailed_feedback,
    }
}

/// Analyze every blank-line-separated prompt in a file. Invalid prompts
/// are skipped with a warning so one bad entry cannot sink a batch.
fn analyze_file(
    scorer: &ScoreEngine,
    optimizer: &OptimizationEngine,
    path: &Path,
    verbose: bool,
) -> Result<Vec<Analyzed>> {
    let prompts = read_prompts(path)?;
    if prompts.is_empty() {
        bail!("no prompts found in {}", path.display());
    }

    let mut analyzed = Vec::new();
    for (i, prompt) in prompts.iter().enumerate() {
        if let Err(e) = validate_prompt(prompt) {
            warn!("Skipping prompt {}/{}: {e}", i + 1, prompts.len());
            continue;
        }
        println!("Analyzing prompt {}/{}...", i + 1, prompts.len());
        let one = analyze_one(scorer, optimizer, prompt);
        if prompts.len() == 1 || verbose {
            display(&one, verbose);
        }
        analyzed.push(one);
    }

    if analyzed.is_empty() {
        bail!("no valid prompts in {}", path.display());
    }
    Ok(analyzed)
}

/// Split a prompt file into blank-line-separated entries.
fn read_prompts(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect())
}

fn run_interactive(verbose: bool) -> Result<()> {
    println!("=== Promptforge ===");
    println!("Enter your prompt for analysis (press Enter twice to finish).");
    println!("Type 'quit' to exit.\n");

    let scorer = ScoreEngine::new();
    let optimizer = OptimizationEngine::new();
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        print!("Prompt: ");
        io::stdout().flush()?;

        let Some(prompt) = read_prompt_block(&mut reader)? else {
            println!("Goodbye!");
            return Ok(());
        };
        if let Err(e) = validate_prompt(&prompt) {
            println!("Invalid prompt: {e}\n");
            continue;
        }

        let one = analyze_one(&scorer, &optimizer, &prompt);
        display(&one, verbose);
        println!("\n{}\n", "=".repeat(60));
    }
}

/// Read one multi-line prompt. A blank line ends the prompt, `quit` or
/// EOF ends the session (None). Leading blank lines are ignored.
fn read_prompt_block(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut lines: Vec<String> = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            });
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        if line.is_empty() {
            if lines.is_empty() {
                continue;
            }
            return Ok(Some(lines.join("\n")));
        }
        lines.push(line.to_string());
    }
}

fn dim_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Clarity => "Clarity",
        Dimension::Specificity => "Specificity",
        Dimension::Structure => "Structure",
        Dimension::Context => "Context",
        Dimension::Creativity => "Creativity",
    }
}

/// Score with color: green at 8+, yellow at 6+, red below.
fn colored_score(score: f64) -> String {
    let color = if score >= 8.0 {
        "\x1b[32m"
    } else if score >= 6.0 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!("{color}{score:.1}/10{RESET}")
}

fn display(analyzed: &Analyzed, verbose: bool) {
    let report = &analyzed.report;

    println!("{}", "=".repeat(60));
    println!("{BOLD}PROMPT ANALYSIS RESULTS{RESET}");
    println!("{}", "=".repeat(60));

    if verbose {
        println!("\n{BOLD}ORIGINAL PROMPT:{RESET}");
        println!("{DIM}{}{RESET}", report.original_prompt);
    }

    println!("\n{BOLD}OPTIMIZED PROMPT:{RESET}");
    println!("{}", report.optimized_prompt);

    println!("\n{BOLD}ANALYSIS SCORES:{RESET}");
    println!("{:<13}{}", "Overall:", colored_score(report.scores.overall));
    for (dimension, score) in report.scores.dimension_scores() {
        let label = format!("{}:", dim_label(dimension));
        println!("{label:<13}{}", colored_score(score));
    }

    print_bulleted("STRENGTHS:", &report.feedback.strengths);
    print_bulleted("WEAKNESSES:", &report.feedback.weaknesses);
    print_bulleted("SUGGESTIONS FOR IMPROVEMENT:", &report.feedback.suggestions);

    if verbose && analyzed.detailed.values().any(|notes| !notes.is_empty()) {
        println!("\n{BOLD}DETAILED FEEDBACK:{RESET}");
        for (dimension, notes) in &analyzed.detailed {
            if notes.is_empty() {
                continue;
            }
            println!("{}:", dim_label(*dimension));
            for note in notes {
                println!("  • {note}");
            }
        }
    }
}

fn print_bulleted(heading: &str, items: &[String]) {
    println!("\n{BOLD}{heading}{RESET}");
    for item in items {
        println!("• {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_prompts_splits_on_blank_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prompts.txt");
        std::fs::write(
            &path,
            "Explain DNS resolution.\n\n  \n\nWrite a haiku about autumn.\nMake it vivid.\n\n",
        )
        .expect("write prompts");

        let prompts = read_prompts(&path).expect("read prompts");
        assert_eq!(
            prompts,
            vec![
                "Explain DNS resolution.".to_string(),
                "Write a haiku about autumn.\nMake it vivid.".to_string(),
            ]
        );
    }

    #[test]
    fn test_read_prompts_missing_file_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(read_prompts(&dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn test_resolve_format_precedence() {
        let config = Config {
            output_format: "csv".into(),
            verbose: false,
        };
        // Explicit flag wins over both extension and config.
        let from_flag =
            resolve_format(Some("json"), Some(Path::new("out.csv")), &config).expect("format");
        assert_eq!(from_flag, OutputFormat::Json);
        // Extension wins over config.
        let from_ext = resolve_format(None, Some(Path::new("out.json")), &config).expect("format");
        assert_eq!(from_ext, OutputFormat::Json);
        // Config is the fallback.
        let from_config = resolve_format(None, None, &config).expect("format");
        assert_eq!(from_config, OutputFormat::Csv);
    }

    #[test]
    fn test_resolve_format_bad_config_falls_back_to_text() {
        let config = Config {
            output_format: "yaml".into(),
            verbose: false,
        };
        let format = resolve_format(None, None, &config).expect("format");
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_read_prompt_block_ends_on_blank_line() {
        let mut input = Cursor::new("first line\nsecond line\n\nleftover\n");
        let prompt = read_prompt_block(&mut input).expect("read block");
        assert_eq!(prompt.as_deref(), Some("first line\nsecond line"));
    }

    #[test]
    fn test_read_prompt_block_quit_and_eof() {
        let mut quit = Cursor::new("quit\n");
        assert_eq!(read_prompt_block(&mut quit).expect("read block"), None);

        let mut empty = Cursor::new("");
        assert_eq!(read_prompt_block(&mut empty).expect("read block"), None);

        // EOF after content still yields the prompt.
        let mut no_trailing = Cursor::new("only line");
        let prompt = read_prompt_block(&mut no_trailing).expect("read block");
        assert_eq!(prompt.as_deref(), Some("only line"));
    }

    #[test]
    fn test_read_prompt_block_skips_leading_blanks() {
        let mut input = Cursor::new("\n\nactual prompt\n\n");
        let prompt = read_prompt_block(&mut input).expect("read block");
        assert_eq!(prompt.as_deref(), Some("actual prompt"));
    }

    #[test]
    fn test_analyze_one_reports_original_prompt() {
        let one = analyze_one(
            &ScoreEngine::new(),
            &OptimizationEngine::new(),
            "Write a story about a robot.",
        );
        assert_eq!(one.report.original_prompt, "Write a story about a robot.");
        assert!(!one.report.optimized_prompt.is_empty());
        assert!(!one.detailed.is_empty());
    }
}
