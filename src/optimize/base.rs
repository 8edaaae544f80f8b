//! Base strategy trait and types
//!
//! Every dimension has one rewrite strategy. A strategy takes the
//! current text plus the dimension's original score and returns the
//! rewritten text with human-readable notes describing what changed.
//! Failure is part of the contract: the orchestrator skips a failing
//! strategy and continues with the rest.

use crate::models::Dimension;
use anyhow::Result;

/// Result of one strategy application.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// The (possibly unchanged) text after the rewrite.
    pub text: String,
    /// Descriptions of the changes actually applied; empty if none.
    pub notes: Vec<String>,
}

impl Rewrite {
    /// A rewrite that left the text untouched.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            notes: Vec::new(),
        }
    }
}

/// A per-dimension text rewrite strategy.
pub trait Strategy: Send + Sync {
    /// The dimension this strategy improves.
    fn dimension(&self) -> Dimension;

    /// Human-readable description of what this strategy does.
    fn description(&self) -> &'static str;

    /// Rewrite `text` given the dimension's original score.
    ///
    /// Strategies are pure text transforms; `score` gates the more
    /// aggressive rewrites (each strategy documents its thresholds).
    fn rewrite(&self, text: &str, score: f64) -> Result<Rewrite>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_has_no_notes() {
        let rewrite = Rewrite::unchanged("same text");
        assert_eq!(rewrite.text, "same text");
        assert!(rewrite.notes.is_empty());
    }
}
