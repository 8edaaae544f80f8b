//! Per-dimension feedback from score thresholds.
//!
//! A dimension scoring below 6.0 gets a fixed triplet of improvement
//! hints; 8.0 and above gets a single affirming remark; the 6.0–8.0 band
//! stays silent.

use crate::models::{DetailedFeedback, Dimension, ScoreVector};

const NEEDS_WORK: f64 = 6.0;
const EXCELLENT: f64 = 8.0;

fn improvement_hints(dimension: Dimension) -> [&'static str; 3] {
    match dimension {
        Dimension::Clarity => [
            "Consider using more specific and clear language",
            "Avoid ambiguous pronouns like 'it', 'this', 'that'",
            "Break down complex sentences into simpler ones",
        ],
        Dimension::Specificity => [
            "Add specific requirements or constraints",
            "Include desired format, length, or style",
            "Provide examples of expected output",
        ],
        Dimension::Structure => [
            "Organize the prompt with clear sections",
            "Use bullet points or numbered lists for multiple requirements",
            "Add transition words to improve flow",
        ],
        Dimension::Context => [
            "Provide more background information",
            "Define the role or persona for the AI",
            "Specify the target audience or use case",
        ],
        Dimension::Creativity => [
            "Encourage creative and innovative responses",
            "Ask for multiple alternatives or approaches",
            "Use open-ended questions to inspire creativity",
        ],
    }
}

fn affirmation(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Clarity => "Prompt demonstrates excellent clarity",
        Dimension::Specificity => "Prompt is highly specific and detailed",
        Dimension::Structure => "Prompt is well-structured and organized",
        Dimension::Context => "Prompt provides excellent context",
        Dimension::Creativity => "Prompt effectively encourages creativity",
    }
}

/// Build the per-dimension feedback map for a score vector.
pub fn detailed_feedback(scores: &ScoreVector) -> DetailedFeedback {
    let mut feedback = DetailedFeedback::new();
    for (dimension, score) in scores.dimension_scores() {
        let mut notes = Vec::new();
        if score < NEEDS_WORK {
            notes.extend(improvement_hints(dimension).map(String::from));
        }
        if score >= EXCELLENT {
            notes.push(affirmation(dimension).to_string());
        }
        feedback.insert(dimension, notes);
    }
    feedback
}
