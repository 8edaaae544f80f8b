//! Structure rewrites: paragraph grouping for walls of text and
//! task/instruction sections for long unstructured prompts.

use crate::models::Dimension;
use crate::optimize::base::{Rewrite, Strategy};
use crate::textutil::{split_sentences, word_count};
use anyhow::Result;

/// A sentence starting with one of these begins a new paragraph chunk.
const CHUNK_STARTERS: &[&str] = &[
    "please",
    "also",
    "additionally",
    "furthermore",
    "include",
    "make sure",
];

/// Single-line prompts longer than this get paragraph grouping.
const WALL_OF_TEXT_WORDS: usize = 50;

/// Prompts longer than this with no colon and at most two lines get
/// wrapped in task/instruction sections.
const SECTIONED_WORDS: usize = 100;

const INSTRUCTIONS_BLOCK: &str =
    "\n\nInstructions:\nPlease ensure your response is comprehensive and well-structured.";

pub struct StructureStrategy;

impl Strategy for StructureStrategy {
    fn dimension(&self) -> Dimension {
        Dimension::Structure
    }

    fn description(&self) -> &'static str {
        "Groups run-on prompts into paragraphs and adds section headers"
    }

    fn rewrite(&self, text: &str, _score: f64) -> Result<Rewrite> {
        let mut notes = Vec::new();
        let mut out = text.to_string();

        if !out.trim().contains('\n') && word_count(&out) > WALL_OF_TEXT_WORDS {
            if let Some(grouped) = self.group_into_paragraphs(&out) {
                out = grouped;
                notes.push("Restructured into clear paragraphs".to_string());
            }
        }

        if word_count(&out) > SECTIONED_WORDS
            && !out.contains(':')
            && out.split('\n').count() <= 2
        {
            out = format!("Task:\n{out}{INSTRUCTIONS_BLOCK}");
            notes.push("Added task and instruction sections".to_string());
        }

        Ok(Rewrite { text: out, notes })
    }
}

impl StructureStrategy {
    /// Group sentences into paragraph chunks, starting a new chunk when a
    /// sentence begins with an instruction starter. Returns `None` when
    /// everything lands in a single chunk.
    fn group_into_paragraphs(&self, text: &str) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for sentence in split_sentences(text) {
            current.push(sentence);
            if Self::starts_new_chunk(sentence) && current.len() > 1 {
                let head = current[..current.len() - 1].join(". ");
                parts.push(format!("{head}."));
                current = vec![sentence];
            }
        }
        if !current.is_empty() {
            parts.push(format!("{}.", current.join(". ")));
        }

        (parts.len() > 1).then(|| parts.join("\n\n"))
    }

    fn starts_new_chunk(sentence: &str) -> bool {
        CHUNK_STARTERS.iter().any(|starter| {
            sentence
                .get(..starter.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(starter))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str, score: f64) -> Rewrite {
        StructureStrategy
            .rewrite(text, score)
            .expect("structure rewrite")
    }

    #[test]
    fn test_wall_of_text_gains_paragraph_break() {
        let text = "Describe the data pipeline in depth covering the ingestion validation \
                    storage and reporting stages with the main design tradeoffs for each \
                    stage and the reasons the current layout was chosen over the rejected \
                    designs. Also cover the error handling path with realistic failure \
                    examples drawn from production incidents. Make sure every section ends \
                    with a short summary of its key points.";
        assert!(word_count(&text) > WALL_OF_TEXT_WORDS);
        let result = rewrite(&text, 4.0);
        assert!(result.text.contains("\n\n"));
        assert_eq!(result.notes.len(), 1);
    }

    #[test]
    fn test_short_single_line_untouched() {
        let result = rewrite("List the steps.", 4.0);
        assert_eq!(result.text, "List the steps.");
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_multiline_prompt_skips_grouping() {
        let text = format!("{}\nsecond line", "word ".repeat(60).trim_end());
        let result = rewrite(&text, 4.0);
        assert!(!result.notes.iter().any(|n| n.contains("paragraphs")));
    }

    #[test]
    fn test_long_unpunctuated_prompt_gains_sections() {
        // No sentence terminators, no colon, one line, > 100 words.
        let text = "word ".repeat(110).trim_end().to_string();
        let result = rewrite(&text, 4.0);
        assert!(result.text.starts_with("Task:\n"));
        assert!(result.text.contains("Instructions:"));
    }

    #[test]
    fn test_colon_suppresses_sections() {
        let text = format!("Overview: {}", "word ".repeat(110).trim_end());
        let result = rewrite(&text, 4.0);
        assert!(!result.text.starts_with("Task:"));
    }
}
