//! Creativity rewrites: encouragement blocks and restrictive-language
//! softening.

use crate::models::Dimension;
use crate::optimize::base::{Rewrite, Strategy};
use crate::scoring::indicators::restrictive_keyword_count;
use crate::textutil::contains_any_ci;
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

/// Keywords whose presence means the prompt already invites creativity.
const CREATIVE_TRIGGERS: &[&str] = &["creative", "innovative", "unique", "original", "think outside"];

/// Phrases whose presence means alternatives were already requested.
const ALTERNATIVE_TRIGGERS: &[&str] =
    &["alternatives", "different ways", "various approaches", "multiple"];

const APPROACH_BLOCK: &str =
    "\n\nApproach: Feel free to be creative and think of innovative solutions.";
const ALTERNATIVES_BLOCK: &str =
    "\n\nAdditional: Please consider multiple approaches and provide alternatives where applicable.";

/// Below this score an alternatives request is appended as well.
const ALTERNATIVES_THRESHOLD: f64 = 5.0;

/// More restrictive keywords than this triggers softening.
const RESTRICTIVE_LIMIT: usize = 3;

static ONLY_WORD: OnceLock<Regex> = OnceLock::new();
static EXACTLY_WORD: OnceLock<Regex> = OnceLock::new();

fn only_word() -> &'static Regex {
    ONLY_WORD.get_or_init(|| Regex::new(r"(?i)\bonly\b").expect("valid regex"))
}

fn exactly_word() -> &'static Regex {
    EXACTLY_WORD.get_or_init(|| Regex::new(r"(?i)\bexactly\b").expect("valid regex"))
}

pub struct CreativityStrategy;

impl Strategy for CreativityStrategy {
    fn dimension(&self) -> Dimension {
        Dimension::Creativity
    }

    fn description(&self) -> &'static str {
        "Encourages open-ended answers and softens restrictive wording"
    }

    fn rewrite(&self, text: &str, score: f64) -> Result<Rewrite> {
        let mut notes = Vec::new();
        let mut out = text.to_string();

        if !contains_any_ci(&out, CREATIVE_TRIGGERS) {
            out.push_str(APPROACH_BLOCK);
            notes.push("Added creativity encouragement".to_string());
        }

        if score < ALTERNATIVES_THRESHOLD && !contains_any_ci(&out, ALTERNATIVE_TRIGGERS) {
            out.push_str(ALTERNATIVES_BLOCK);
            notes.push("Requested alternative approaches".to_string());
        }

        // Soften at most one "only" and one "exactly" per pass; other
        // restrictive words count toward the trigger but are never
        // rewritten.
        if restrictive_keyword_count(&out) > RESTRICTIVE_LIMIT {
            out = only_word().replace(&out, "primarily").into_owned();
            out = exactly_word().replace(&out, "preferably").into_owned();
            notes.push("Softened restrictive language".to_string());
        }

        Ok(Rewrite { text: out, notes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str, score: f64) -> Rewrite {
        CreativityStrategy
            .rewrite(text, score)
            .expect("creativity rewrite")
    }

    #[test]
    fn test_adds_approach_block() {
        let result = rewrite("Draft a slogan for the launch.", 6.0);
        assert!(result.text.contains("Approach:"));
        // Not below 5.0, so no alternatives request.
        assert!(!result.text.contains("Additional:"));
    }

    #[test]
    fn test_alternatives_block_below_threshold() {
        // The approach block itself contains "creative", so the input
        // must avoid alternative triggers for the second append to fire.
        let result = rewrite("Draft a slogan.", 4.0);
        assert!(result.text.contains("Additional:"));
    }

    #[test]
    fn test_existing_creative_keyword_suppresses_block() {
        let result = rewrite("Write an original slogan with multiple variants.", 4.0);
        assert!(!result.text.contains("Approach:"));
        assert!(!result.text.contains("Additional:"));
    }

    #[test]
    fn test_softens_first_only_and_exactly_once() {
        let text = "Use only the given data, follow the layout exactly, keep precisely \
                    three columns, and the footer is required.";
        let result = rewrite(text, 6.0);
        assert!(result.text.contains("primarily"));
        assert!(result.text.contains("preferably"));
        assert!(!only_word().is_match(&result.text));
        // "precisely" and "required" counted toward the trigger but stay.
        assert!(result.text.contains("precisely"));
        assert!(result.text.contains("required"));
    }

    #[test]
    fn test_three_restrictive_words_not_softened() {
        let text = "Use only the given data, follow the layout exactly, keep precisely \
                    three columns.";
        let result = rewrite(text, 6.0);
        assert!(result.text.contains("only"));
        assert!(result.text.contains("exactly"));
    }
}
