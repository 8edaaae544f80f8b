//! Core data models for Promptforge
//!
//! These models are used throughout the codebase for representing
//! dimensions, score vectors, and analysis results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five quality dimensions a prompt is scored on.
///
/// The enum order is the canonical dimension order: it breaks ties when
/// strategies are sorted by score and fixes the order of derived
/// suggestion lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Clarity,
    Specificity,
    Structure,
    Context,
    Creativity,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Clarity,
        Dimension::Specificity,
        Dimension::Structure,
        Dimension::Context,
        Dimension::Creativity,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Clarity => "clarity",
            Dimension::Specificity => "specificity",
            Dimension::Structure => "structure",
            Dimension::Context => "context",
            Dimension::Creativity => "creativity",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Five dimension scores plus their unweighted mean.
///
/// Every score is clamped to [0.0, 10.0] by the engine before the vector
/// is built; `overall` is always recomputed from the five dimensions and
/// never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub overall: f64,
    pub clarity: f64,
    pub specificity: f64,
    pub structure: f64,
    pub context: f64,
    pub creativity: f64,
}

impl ScoreVector {
    /// Build a vector from the five dimension scores, computing the mean.
    pub fn new(
        clarity: f64,
        specificity: f64,
        structure: f64,
        context: f64,
        creativity: f64,
    ) -> Self {
        let overall = (clarity + specificity + structure + context + creativity) / 5.0;
        Self {
            overall,
            clarity,
            specificity,
            structure,
            context,
            creativity,
        }
    }

    /// Score for a single dimension.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Clarity => self.clarity,
            Dimension::Specificity => self.specificity,
            Dimension::Structure => self.structure,
            Dimension::Context => self.context,
            Dimension::Creativity => self.creativity,
        }
    }

    /// The five (dimension, score) pairs in canonical order.
    pub fn dimension_scores(&self) -> [(Dimension, f64); 5] {
        [
            (Dimension::Clarity, self.clarity),
            (Dimension::Specificity, self.specificity),
            (Dimension::Structure, self.structure),
            (Dimension::Context, self.context),
            (Dimension::Creativity, self.creativity),
        ]
    }
}

/// Ordered improvement hints per dimension, produced from score thresholds.
pub type DetailedFeedback = BTreeMap<Dimension, Vec<String>>;

/// Output of [`crate::scoring::ScoreEngine::analyze`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptAnalysis {
    pub scores: ScoreVector,
    pub detailed_feedback: DetailedFeedback,
}

/// Output of [`crate::optimize::OptimizationEngine::optimize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimized_prompt: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Strengths, weaknesses, and suggestions as rendered in reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Complete record for one analyzed prompt, consumed by the reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptReport {
    pub original_prompt: String,
    pub optimized_prompt: String,
    pub scores: ScoreVector,
    pub feedback: Feedback,
}

impl PromptReport {
    pub fn new(original: &str, analysis: &PromptAnalysis, result: OptimizationResult) -> Self {
        Self {
            original_prompt: original.to_string(),
            optimized_prompt: result.optimized_prompt,
            scores: analysis.scores,
            feedback: Feedback {
                strengths: result.strengths,
                weaknesses: result.weaknesses,
                suggestions: result.suggestions,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_mean_of_dimensions() {
        let scores = ScoreVector::new(5.0, 4.0, 5.0, 4.0, 5.0);
        assert_eq!(scores.overall, 4.6);
    }

    #[test]
    fn test_dimension_scores_in_canonical_order() {
        let scores = ScoreVector::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let pairs = scores.dimension_scores();
        assert_eq!(pairs[0], (Dimension::Clarity, 1.0));
        assert_eq!(pairs[4], (Dimension::Creativity, 5.0));
        for (dim, score) in pairs {
            assert_eq!(scores.get(dim), score);
        }
    }

    #[test]
    fn test_dimension_serializes_lowercase() {
        let json = serde_json::to_string(&Dimension::Specificity).expect("serialize");
        assert_eq!(json, "\"specificity\"");
    }
}
