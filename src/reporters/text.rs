//! Plain-text reporter
//!
//! Produces the file-oriented report format: no ANSI escapes, one
//! delimited section per analyzed prompt. Terminal display with colors
//! lives in the CLI layer instead.

use crate::models::PromptReport;
use anyhow::Result;
use chrono::Local;
use std::fmt::Write;

/// Render reports as a formatted text document
pub fn render(reports: &[PromptReport]) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "PROMPT ANALYSIS REPORT")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Total Prompts Analyzed: {}\n", reports.len())?;

    for (i, report) in reports.iter().enumerate() {
        writeln!(out, "ANALYSIS {}", i + 1)?;
        writeln!(out, "{}\n", "-".repeat(20))?;

        writeln!(out, "ORIGINAL PROMPT:")?;
        writeln!(out, "{}\n", report.original_prompt)?;

        writeln!(out, "OPTIMIZED PROMPT:")?;
        writeln!(out, "{}\n", report.optimized_prompt)?;

        let scores = &report.scores;
        writeln!(out, "SCORES:")?;
        writeln!(out, "Overall: {:.1}/10", scores.overall)?;
        writeln!(out, "Clarity: {:.1}/10", scores.clarity)?;
        writeln!(out, "Specificity: {:.1}/10", scores.specificity)?;
        writeln!(out, "Structure: {:.1}/10", scores.structure)?;
        writeln!(out, "Context: {:.1}/10", scores.context)?;
        writeln!(out, "Creativity: {:.1}/10\n", scores.creativity)?;

        write_bulleted(&mut out, "STRENGTHS:", &report.feedback.strengths)?;
        write_bulleted(&mut out, "WEAKNESSES:", &report.feedback.weaknesses)?;
        write_bulleted(&mut out, "SUGGESTIONS:", &report.feedback.suggestions)?;

        if i + 1 < reports.len() {
            writeln!(out, "{}\n", "=".repeat(50))?;
        }
    }

    Ok(out)
}

fn write_bulleted(out: &mut String, heading: &str, items: &[String]) -> Result<()> {
    writeln!(out, "{heading}")?;
    for item in items {
        writeln!(out, "• {item}")?;
    }
    writeln!(out)?;
    Ok(())
}
