//! Specificity rewrites: append format, length, and requirements
//! guidance when the prompt names none of its own.

use crate::models::Dimension;
use crate::optimize::base::{Rewrite, Strategy};
use crate::textutil::{contains_any_ci, contains_ci};
use anyhow::Result;

/// Keywords whose presence means the prompt already specifies a format.
/// Deliberately a different set from the scoring format keywords: here
/// the word "format" itself counts.
const FORMAT_TRIGGERS: &[&str] = &["format", "json", "csv", "list", "paragraph", "table"];

/// Keywords whose presence means the prompt already bounds its length.
const LENGTH_TRIGGERS: &[&str] = &["length", "words", "sentences", "paragraphs", "brief", "detailed"];

const FORMAT_BLOCK: &str =
    "\n\nFormat: Please provide your response in a clear, structured format.";
const LENGTH_BLOCK: &str = "\n\nLength: Provide a comprehensive response with sufficient detail.";
const REQUIREMENTS_BLOCK: &str = "\n\nRequirements:\n- Be specific and detailed\n- Include relevant examples\n- Address all aspects of the request";

/// Below this score a requirements block is appended as well.
const REQUIREMENTS_THRESHOLD: f64 = 4.0;

pub struct SpecificityStrategy;

impl Strategy for SpecificityStrategy {
    fn dimension(&self) -> Dimension {
        Dimension::Specificity
    }

    fn description(&self) -> &'static str {
        "Appends format, length, and requirements guidance"
    }

    fn rewrite(&self, text: &str, score: f64) -> Result<Rewrite> {
        let mut notes = Vec::new();
        let mut out = text.to_string();

        if !contains_any_ci(&out, FORMAT_TRIGGERS) {
            out.push_str(FORMAT_BLOCK);
            notes.push("Added a format specification".to_string());
        }

        if !contains_any_ci(&out, LENGTH_TRIGGERS) {
            out.push_str(LENGTH_BLOCK);
            notes.push("Added a length guideline".to_string());
        }

        if score < REQUIREMENTS_THRESHOLD
            && !contains_ci(&out, "requirements:")
            && !contains_ci(&out, "constraints:")
        {
            out.push_str(REQUIREMENTS_BLOCK);
            notes.push("Added explicit requirements".to_string());
        }

        Ok(Rewrite { text: out, notes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str, score: f64) -> Rewrite {
        SpecificityStrategy
            .rewrite(text, score)
            .expect("specificity rewrite")
    }

    #[test]
    fn test_adds_format_and_length_but_not_requirements_at_base() {
        let result = rewrite("Write a story about a robot.", 4.0);
        assert!(result.text.contains("Format:"));
        assert!(result.text.contains("Length:"));
        assert!(!result.text.contains("Requirements:"));
    }

    #[test]
    fn test_requirements_block_below_threshold() {
        let result = rewrite("Write a story about a robot.", 3.9);
        assert!(result.text.contains("Requirements:"));
        assert_eq!(result.notes.len(), 3);
    }

    #[test]
    fn test_existing_format_keyword_suppresses_block() {
        let result = rewrite("Return the answer as JSON with brief notes.", 5.0);
        // "json" satisfies the format check, "brief" the length check.
        assert!(!result.text.contains("Format:"));
        assert!(!result.text.contains("Length:"));
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_length_check_sees_format_block_text() {
        // The appended format block contains "format" but no length
        // keyword, so the length block is still added after it.
        let result = rewrite("Explain the tradeoffs.", 6.0);
        let format_pos = result.text.find("Format:").expect("format block");
        let length_pos = result.text.find("Length:").expect("length block");
        assert!(format_pos < length_pos);
    }
}
