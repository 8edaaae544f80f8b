//! Prompt optimization
//!
//! Rewrites a prompt using one strategy per quality dimension:
//!
//! 1. Rank the five dimensions by score, worst first (ties keep the
//!    canonical clarity-through-creativity order).
//! 2. Apply each dimension's strategy when its score is below 7.0,
//!    threading the rewritten text through to the next strategy.
//! 3. A failing strategy is skipped and logged, never fatal: a
//!    partially-optimized prompt beats no prompt at all.
//! 4. Derive strengths, weaknesses, and suggestions from the *original*
//!    text and scores.
//!
//! Optimization is deterministic: the same (text, scores) input always
//! produces the same result. It is not idempotent; rerunning it on its
//! own output can append further guidance blocks, but a block whose
//! trigger keyword is now present is never duplicated.

mod base;
mod clarity;
mod context;
mod creativity;
mod feedback;
mod specificity;
mod structure;

pub use base::{Rewrite, Strategy};
pub use clarity::ClarityStrategy;
pub use context::ContextStrategy;
pub use creativity::CreativityStrategy;
pub use specificity::SpecificityStrategy;
pub use structure::StructureStrategy;

use crate::models::{Dimension, OptimizationResult, ScoreVector};
use tracing::{debug, warn};

/// A dimension scoring below this gets its rewrite strategy applied.
const REWRITE_THRESHOLD: f64 = 7.0;

/// Applies per-dimension rewrite strategies in worst-score-first order.
pub struct OptimizationEngine {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Default for OptimizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizationEngine {
    /// Engine with the standard strategy per dimension.
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(ClarityStrategy),
            Box::new(SpecificityStrategy),
            Box::new(StructureStrategy),
            Box::new(ContextStrategy),
            Box::new(CreativityStrategy),
        ])
    }

    /// Engine with a custom strategy set. Strategies are looked up by
    /// dimension; a dimension without a strategy is left unoptimized.
    pub fn with_strategies(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    /// Rewrite `original` guided by its score vector.
    pub fn optimize(&self, original: &str, scores: &ScoreVector) -> OptimizationResult {
        let mut ranked = scores.dimension_scores();
        // Stable sort: equal scores keep the canonical dimension order.
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut text = original.to_string();
        let mut transform_log: Vec<String> = Vec::new();

        for (dimension, score) in ranked {
            if score >= REWRITE_THRESHOLD {
                continue;
            }
            let Some(strategy) = self.strategy_for(dimension) else {
                continue;
            };
            match strategy.rewrite(&text, score) {
                Ok(rewrite) => {
                    text = rewrite.text;
                    transform_log.extend(rewrite.notes);
                }
                Err(error) => {
                    // Best-effort policy: skip and keep going.
                    warn!(%dimension, %error, "rewrite strategy failed, skipping");
                }
            }
        }

        if !transform_log.is_empty() {
            debug!(rewrites = ?transform_log, "applied prompt rewrites");
        }

        OptimizationResult {
            optimized_prompt: text,
            strengths: feedback::strengths(original, scores),
            weaknesses: feedback::weaknesses(original, scores),
            suggestions: feedback::suggestions(scores),
        }
    }

    fn strategy_for(&self, dimension: Dimension) -> Option<&dyn Strategy> {
        self.strategies
            .iter()
            .find(|s| s.dimension() == dimension)
            .map(|s| s.as_ref())
    }
}
