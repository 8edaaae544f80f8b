//! Clarity rewrites: pronoun disambiguation, long-sentence splitting,
//! and polite framing for very weak prompts.

use crate::models::Dimension;
use crate::optimize::base::{Rewrite, Strategy};
use crate::textutil::{contains_ci, replace_first_ci, sentence_segments, word_count};
use anyhow::Result;

/// Pronoun replacements in priority order. Only the first entry whose
/// pattern occurs is applied, and only its first occurrence is replaced.
const PRONOUN_REPLACEMENTS: [(&str, &str); 3] = [
    (" it ", " the item "),
    (" they ", " these items "),
    (" them ", " these elements "),
];

/// A sentence longer than this many words gets split at its first " and ".
const LONG_SENTENCE_WORDS: usize = 30;

/// Below this score the prompt gets polite framing prepended.
const POLITE_THRESHOLD: f64 = 5.0;

pub struct ClarityStrategy;

impl Strategy for ClarityStrategy {
    fn dimension(&self) -> Dimension {
        Dimension::Clarity
    }

    fn description(&self) -> &'static str {
        "Disambiguates pronouns, splits run-on sentences, adds polite framing"
    }

    fn rewrite(&self, text: &str, score: f64) -> Result<Rewrite> {
        let mut notes = Vec::new();
        let mut out = text.to_string();

        // One replacement total: first matching entry, first occurrence.
        for (pronoun, replacement) in PRONOUN_REPLACEMENTS {
            if let Some(replaced) = replace_first_ci(&out, pronoun, replacement) {
                out = replaced;
                notes.push("Replaced an ambiguous pronoun with a specific term".to_string());
                break;
            }
        }

        out = self.split_long_sentences(&out, &mut notes);

        if score < POLITE_THRESHOLD && !out.trim().ends_with('?') && !contains_ci(&out, "please") {
            let mut chars = out.chars();
            if let Some(first) = chars.next() {
                out = format!("Please {}{}", first.to_lowercase(), chars.as_str());
                notes.push("Added polite framing".to_string());
            }
        }

        Ok(Rewrite { text: out, notes })
    }
}

impl ClarityStrategy {
    /// Split each over-long sentence at its first " and ", joining the
    /// halves with "Additionally, ". Sentences without " and " are left
    /// alone no matter how long they are.
    fn split_long_sentences(&self, text: &str, notes: &mut Vec<String>) -> String {
        let mut out = String::with_capacity(text.len());
        let mut split_any = false;

        for segment in sentence_segments(text) {
            let body = segment.body;
            match body.split_once(" and ") {
                Some((head, tail)) if word_count(body) > LONG_SENTENCE_WORDS => {
                    out.push_str(head);
                    out.push_str(". Additionally, ");
                    out.push_str(tail);
                    split_any = true;
                }
                _ => out.push_str(body),
            }
            out.push_str(segment.terminator);
        }

        if split_any {
            notes.push("Split a long sentence for better readability".to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str, score: f64) -> Rewrite {
        ClarityStrategy.rewrite(text, score).expect("clarity rewrite")
    }

    #[test]
    fn test_replaces_first_pronoun_and_adds_please() {
        let result = rewrite("Summarize it for me", 4.0);
        assert_eq!(result.text, "Please summarize the item for me");
        assert_eq!(result.notes.len(), 2);
    }

    #[test]
    fn test_only_first_mapping_entry_applies() {
        // " it " wins over " they " even though both are present, and
        // only one occurrence of " it " is replaced.
        let result = rewrite("Take it home so they can use it later", 6.0);
        assert_eq!(result.text, "Take the item home so they can use it later");
    }

    #[test]
    fn test_no_please_when_question_or_polite() {
        let question = rewrite("What should the output contain?", 4.0);
        assert!(!question.text.starts_with("Please"));

        let polite = rewrite("Please summarize the findings", 4.0);
        assert_eq!(polite.text, "Please summarize the findings");
    }

    #[test]
    fn test_long_sentence_split_at_first_and() {
        let long = format!(
            "{} and {}.",
            "alpha ".repeat(20).trim_end(),
            "beta ".repeat(15).trim_end()
        );
        let result = rewrite(&long, 6.0);
        assert!(result.text.contains(". Additionally, beta"));
        // Exactly one split: the tail keeps its original terminator.
        assert_eq!(result.text.matches("Additionally,").count(), 1);
    }

    #[test]
    fn test_long_sentence_without_and_left_alone() {
        let long = format!("{}.", "word ".repeat(40).trim_end());
        let result = rewrite(&long, 6.0);
        assert_eq!(result.text, long);
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_short_text_unchanged_at_mid_score() {
        let result = rewrite("Describe the deployment steps.", 6.5);
        assert_eq!(result.text, "Describe the deployment steps.");
        assert!(result.notes.is_empty());
    }
}
