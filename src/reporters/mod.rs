//! Output reporters for analysis results
//!
//! Supports multiple output formats:
//! - `text` - Plain-text report suitable for files or piping
//! - `json` - Machine-readable JSON
//! - `csv` - One row per analyzed prompt, for spreadsheets

mod csv;
mod json;
mod text;

use crate::models::PromptReport;
use anyhow::{anyhow, Result};
use std::path::Path;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render reports in the specified format
pub fn render(reports: &[PromptReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(reports),
        OutputFormat::Json => json::render(reports),
        OutputFormat::Csv => csv::render(reports),
    }
}

/// Infer an output format from a file path's extension.
///
/// Unknown and missing extensions fall back to text, matching the
/// behavior of `--output report.log` writing a plain-text report.
pub fn format_for_path(path: &Path) -> OutputFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
        Some(ext) if ext.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
        _ => OutputFormat::Text,
    }
}

/// Get the recommended file extension for a format
#[allow(dead_code)] // Public API helper
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Feedback, ScoreVector};

    /// Two-entry fixture shared by the per-format reporter tests
    pub(crate) fn test_reports() -> Vec<PromptReport> {
        vec![
            PromptReport {
                original_prompt: "Write a story about a robot.".into(),
                optimized_prompt: "Context: You are an expert assistant helping with this task.\n\n\
                                   Write a story about a robot."
                    .into(),
                scores: ScoreVector::new(5.0, 4.0, 5.0, 4.0, 5.0),
                feedback: Feedback {
                    strengths: vec!["Shows clear intent to communicate a request".into()],
                    weaknesses: vec![
                        "Lacks specific requirements and constraints".into(),
                        "Too brief - could provide more detail".into(),
                    ],
                    suggestions: vec!["Specify the desired format for the response".into()],
                },
            },
            PromptReport {
                original_prompt: "Say \"hello\", then stop.".into(),
                optimized_prompt: "Say \"hello\", then stop.".into(),
                scores: ScoreVector::new(8.0, 7.5, 8.0, 7.0, 7.5),
                feedback: Feedback {
                    strengths: vec!["Clear and unambiguous language".into()],
                    weaknesses: vec![],
                    suggestions: vec![],
                },
            },
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_format_inferred_from_extension() {
        assert_eq!(format_for_path(Path::new("out.json")), OutputFormat::Json);
        assert_eq!(format_for_path(Path::new("out.CSV")), OutputFormat::Csv);
        assert_eq!(format_for_path(Path::new("out.txt")), OutputFormat::Text);
        assert_eq!(format_for_path(Path::new("report")), OutputFormat::Text);
    }
}
