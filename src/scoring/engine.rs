//! The score engine: raw text in, five clamped dimension scores out.

use crate::models::{PromptAnalysis, ScoreVector};
use crate::scoring::feedback::detailed_feedback;
use crate::scoring::indicators::{
    self, AMBIGUOUS_PRONOUNS, CONSTRAINT_KEYWORDS, DOMAIN_KEYWORDS, FORMAT_KEYWORDS,
    OPEN_QUESTION_PHRASES, PERSPECTIVE_PHRASES, ROLE_PHRASES, TRANSITION_WORDS,
};
use crate::textutil::{
    contains_any_ci, contains_ci, count_occurrences_ci, count_present_ci, mean_words_per_sentence,
    word_count,
};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static NUMBER: OnceLock<Regex> = OnceLock::new();
static BULLET: OnceLock<Regex> = OnceLock::new();
static NUMBERED: OnceLock<Regex> = OnceLock::new();
static HEADER: OnceLock<Regex> = OnceLock::new();

fn number_pattern() -> &'static Regex {
    NUMBER.get_or_init(|| Regex::new(r"\b\d+\b").expect("valid regex"))
}

fn bullet_pattern() -> &'static Regex {
    BULLET.get_or_init(|| Regex::new(r"(?m)^\s*[-*•]\s").expect("valid regex"))
}

fn numbered_pattern() -> &'static Regex {
    NUMBERED.get_or_init(|| Regex::new(r"(?m)^\s*\d+\.\s").expect("valid regex"))
}

fn header_pattern() -> &'static Regex {
    HEADER.get_or_init(|| Regex::new(r"(?m)^[A-Z][^.!?\n]*:$").expect("valid regex"))
}

/// Scores prompts on the five quality dimensions.
///
/// Each dimension follows the same pattern: start from a fixed base,
/// add bounded bonuses for positive signals, subtract bounded penalties
/// for negative ones, clamp to [0, 10]. The engine performs no I/O,
/// never fails, and accepts arbitrary text including the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a prompt, producing scores and per-dimension feedback.
    pub fn analyze(&self, prompt: &str) -> PromptAnalysis {
        let scores = ScoreVector::new(
            self.score_clarity(prompt),
            self.score_specificity(prompt),
            self.score_structure(prompt),
            self.score_context(prompt),
            self.score_creativity(prompt),
        );
        PromptAnalysis {
            scores,
            detailed_feedback: detailed_feedback(&scores),
        }
    }

    fn score_clarity(&self, prompt: &str) -> f64 {
        let mut score = 5.0;

        let positive = indicators::CLARITY.positive_hits(prompt) as f64;
        let negative = indicators::CLARITY.negative_hits(prompt) as f64;
        score += (positive * 0.5).min(3.0);
        score -= (negative * 0.8).min(3.0);

        // Questions sharpen a prompt
        let questions = prompt.matches('?').count() as f64;
        if questions > 0.0 {
            score += (questions * 0.3).min(1.0);
        }

        // Bare pronouns obscure the referent. Space-padded token match
        // only: "it," or a leading "It" is not counted.
        let pronouns: usize = AMBIGUOUS_PRONOUNS
            .iter()
            .map(|p| count_occurrences_ci(prompt, &format!(" {p} ")))
            .sum();
        score -= (pronouns as f64 * 0.2).min(1.5);

        // Long sentences reduce clarity; both thresholds can apply.
        let mean_len = mean_words_per_sentence(prompt);
        if mean_len > 25.0 {
            score -= 1.0;
        }
        if mean_len > 35.0 {
            score -= 2.0;
        }

        score.clamp(0.0, 10.0)
    }

    fn score_specificity(&self, prompt: &str) -> f64 {
        let mut score = 4.0;

        let positive = indicators::SPECIFICITY.positive_hits(prompt) as f64;
        let negative = indicators::SPECIFICITY.negative_hits(prompt) as f64;
        score += (positive * 0.8).min(4.0);
        score -= (negative * 0.6).min(2.0);

        // Distinct numeric tokens signal concrete quantities
        let numbers: HashSet<&str> = number_pattern()
            .find_iter(prompt)
            .map(|m| m.as_str())
            .collect();
        score += (numbers.len() as f64 * 0.3).min(2.0);

        let formats = count_present_ci(prompt, FORMAT_KEYWORDS) as f64;
        score += (formats * 0.5).min(1.5);

        if contains_ci(prompt, "example") || contains_ci(prompt, "for instance") {
            score += 1.0;
        }

        score.clamp(0.0, 10.0)
    }

    fn score_structure(&self, prompt: &str) -> f64 {
        let mut score = 5.0;

        let positive = indicators::STRUCTURE.positive_hits(prompt) as f64;
        score += (positive * 0.6).min(3.0);

        if bullet_pattern().is_match(prompt) {
            score += 1.0;
        }
        if numbered_pattern().is_match(prompt) {
            score += 1.0;
        }
        if header_pattern().is_match(prompt) {
            score += 0.5;
        }

        let transitions = count_present_ci(prompt, TRANSITION_WORDS) as f64;
        score += (transitions * 0.3).min(1.0);

        // A single long wall of text is hard to follow
        let paragraphs = prompt
            .split("\n\n")
            .filter(|p| !p.trim().is_empty())
            .count();
        if paragraphs == 1 && word_count(prompt) > 50 {
            score -= 1.5;
        }

        score.clamp(0.0, 10.0)
    }

    fn score_context(&self, prompt: &str) -> f64 {
        let mut score = 4.0;

        let positive = indicators::CONTEXT.positive_hits(prompt) as f64;
        score += positive.min(4.0);

        if contains_any_ci(prompt, ROLE_PHRASES) {
            score += 1.5;
        }

        let domains = count_present_ci(prompt, DOMAIN_KEYWORDS) as f64;
        score += (domains * 0.4).min(1.0);

        let constraints: usize = CONSTRAINT_KEYWORDS
            .iter()
            .map(|k| count_occurrences_ci(prompt, k))
            .sum();
        score += (constraints as f64 * 0.2).min(1.5);

        score.clamp(0.0, 10.0)
    }

    fn score_creativity(&self, prompt: &str) -> f64 {
        let mut score = 5.0;

        let positive = indicators::CREATIVITY.positive_hits(prompt) as f64;
        let negative = indicators::CREATIVITY.negative_hits(prompt) as f64;
        score += (positive * 0.8).min(3.0);
        score -= (negative * 0.5).min(2.0);

        let open = count_present_ci(prompt, OPEN_QUESTION_PHRASES) as f64;
        score += (open * 0.6).min(2.0);

        if contains_any_ci(prompt, PERSPECTIVE_PHRASES) {
            score += 1.0;
        }

        if indicators::restrictive_keyword_count(prompt) > 3 {
            score -= 1.0;
        }

        score.clamp(0.0, 10.0)
    }
}
