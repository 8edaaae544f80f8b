//! Strength, weakness, and suggestion derivation.
//!
//! All three lists are derived from the *original* text and its scores,
//! never from the rewritten prompt: they describe what the user wrote,
//! not what the optimizer produced.

use crate::models::{Dimension, ScoreVector};
use crate::scoring::indicators::AMBIGUOUS_PRONOUNS;
use crate::textutil::{contains_ci, word_count};

/// Dimensions at or above this score count as strengths.
const STRENGTH_THRESHOLD: f64 = 7.0;

/// Dimensions below this score count as weaknesses.
const WEAKNESS_THRESHOLD: f64 = 6.0;

/// Dimensions below this score contribute suggestion triplets.
const SUGGESTION_THRESHOLD: f64 = 7.0;

/// Suggestions are capped at this many entries after deduplication.
const MAX_SUGGESTIONS: usize = 8;

fn strength_phrase(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Clarity => "Clear and unambiguous language",
        Dimension::Specificity => "Specific requirements and detailed instructions",
        Dimension::Structure => "Well-organized and logically structured",
        Dimension::Context => "Provides sufficient background and context",
        Dimension::Creativity => "Encourages creative and innovative thinking",
    }
}

fn weakness_phrase(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Clarity => "Could be clearer and less ambiguous",
        Dimension::Specificity => "Lacks specific requirements and constraints",
        Dimension::Structure => "Could benefit from better organization",
        Dimension::Context => "Needs more background information and context",
        Dimension::Creativity => "Could better encourage creative responses",
    }
}

fn suggestion_triplet(dimension: Dimension) -> [&'static str; 3] {
    match dimension {
        Dimension::Clarity => [
            "Use specific nouns instead of pronouns when possible",
            "Keep sentences concise and focused",
            "Define any technical terms or jargon",
        ],
        Dimension::Specificity => [
            "Specify the desired format for the response",
            "Include length or scope requirements",
            "Provide examples of what you're looking for",
        ],
        Dimension::Structure => [
            "Use bullet points or numbered lists for multiple requirements",
            "Organize complex prompts into clear sections",
            "Use headers to separate different types of instructions",
        ],
        Dimension::Context => [
            "Provide background information about the task",
            "Define the role you want the AI to assume",
            "Specify the target audience for the response",
        ],
        Dimension::Creativity => [
            "Ask for multiple approaches or alternatives",
            "Use open-ended questions to encourage exploration",
            "Avoid overly restrictive constraints unless necessary",
        ],
    }
}

const GENERAL_SUGGESTIONS: [&str; 3] = [
    "Test your prompts with different phrasings to see what works best",
    "Consider the AI's perspective when crafting instructions",
    "Be explicit about what you want rather than assuming the AI will infer it",
];

/// Strengths of the original prompt: strong dimensions plus a few
/// concrete good practices. Falls back to a single generic entry so the
/// list is never empty.
pub fn strengths(prompt: &str, scores: &ScoreVector) -> Vec<String> {
    let mut strengths = Vec::new();

    for (dimension, score) in scores.dimension_scores() {
        if score >= STRENGTH_THRESHOLD {
            strengths.push(strength_phrase(dimension).to_string());
        }
    }

    if prompt.contains('?') {
        strengths.push("Uses questions to guide response".to_string());
    }
    if contains_ci(prompt, "example") {
        strengths.push("Includes examples for clarification".to_string());
    }
    if prompt.split("\n\n").count() > 1 {
        strengths.push("Uses paragraphs for better organization".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Shows clear intent to communicate a request".to_string());
    }
    strengths
}

/// Weaknesses of the original prompt: weak dimensions plus concrete
/// issues (too short, too long, ambiguous pronouns).
pub fn weaknesses(prompt: &str, scores: &ScoreVector) -> Vec<String> {
    let mut weaknesses = Vec::new();

    for (dimension, score) in scores.dimension_scores() {
        if score < WEAKNESS_THRESHOLD {
            weaknesses.push(weakness_phrase(dimension).to_string());
        }
    }

    let words = word_count(prompt);
    if words < 10 {
        weaknesses.push("Too brief - could provide more detail".to_string());
    }
    if words > 200 {
        weaknesses.push("Quite lengthy - consider breaking into sections".to_string());
    }
    if AMBIGUOUS_PRONOUNS
        .iter()
        .any(|p| contains_ci(prompt, &format!(" {p} ")))
    {
        weaknesses.push("Contains ambiguous pronouns".to_string());
    }

    weaknesses
}

/// Suggestions for future prompts: a fixed triplet per weak dimension in
/// canonical order, then general best practices, deduplicated and capped.
pub fn suggestions(scores: &ScoreVector) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    for (dimension, score) in scores.dimension_scores() {
        if score < SUGGESTION_THRESHOLD {
            suggestions.extend(suggestion_triplet(dimension).map(String::from));
        }
    }
    suggestions.extend(GENERAL_SUGGESTIONS.map(String::from));

    dedup_preserving_order(suggestions)
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strengths_fallback_when_nothing_qualifies() {
        let scores = ScoreVector::new(5.0, 4.0, 5.0, 4.0, 5.0);
        let strengths = strengths("Write a story about a robot.", &scores);
        assert_eq!(strengths, vec!["Shows clear intent to communicate a request"]);
    }

    #[test]
    fn test_strong_dimensions_and_practices_listed() {
        let scores = ScoreVector::new(8.0, 7.0, 5.0, 5.0, 5.0);
        let strengths = strengths("What should change?\n\nSee the example below.", &scores);
        assert!(strengths.contains(&"Clear and unambiguous language".to_string()));
        assert!(strengths.contains(&"Uses questions to guide response".to_string()));
        assert!(strengths.contains(&"Includes examples for clarification".to_string()));
        assert!(strengths.contains(&"Uses paragraphs for better organization".to_string()));
    }

    #[test]
    fn test_weaknesses_flag_brevity_and_pronouns() {
        let scores = ScoreVector::new(5.0, 7.0, 7.0, 7.0, 7.0);
        let weaknesses = weaknesses("Fix it quickly now", &scores);
        assert!(weaknesses.contains(&"Could be clearer and less ambiguous".to_string()));
        assert!(weaknesses.contains(&"Too brief - could provide more detail".to_string()));
        assert!(weaknesses.contains(&"Contains ambiguous pronouns".to_string()));
    }

    #[test]
    fn test_no_weaknesses_for_strong_prompt() {
        let scores = ScoreVector::new(8.0, 8.0, 8.0, 8.0, 8.0);
        let prompt = "Explain the architecture of the billing service to a new engineer \
                      joining the team next week with diagrams";
        assert!(weaknesses(prompt, &scores).is_empty());
    }

    #[test]
    fn test_suggestions_capped_and_unique() {
        let scores = ScoreVector::new(1.0, 1.0, 1.0, 1.0, 1.0);
        let suggestions = suggestions(&scores);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        let unique: std::collections::HashSet<_> = suggestions.iter().collect();
        assert_eq!(unique.len(), suggestions.len());
        // Triplets are emitted in canonical dimension order.
        assert_eq!(suggestions[0], "Use specific nouns instead of pronouns when possible");
    }

    #[test]
    fn test_all_strong_yields_general_suggestions_only() {
        let scores = ScoreVector::new(9.0, 9.0, 9.0, 9.0, 9.0);
        let suggestions = suggestions(&scores);
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions, GENERAL_SUGGESTIONS.map(String::from).to_vec());
    }
}
