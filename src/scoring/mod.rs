//! Prompt quality scoring
//!
//! Turns raw text into five dimension scores plus an overall score. Each
//! dimension is scored by an independent rule set:
//!
//! ```text
//! score = clamp(base + capped bonuses − capped penalties, 0, 10)
//! overall = mean(clarity, specificity, structure, context, creativity)
//! ```
//!
//! Bonuses and penalties come from case-insensitive substring matches
//! against fixed indicator sets ([`indicators`]), plus a handful of
//! shape checks (question marks, numeric tokens, bullet/numbered lines,
//! sentence and paragraph lengths). Every cap is per-signal, so one
//! heavily repeated phrase can never dominate a score.
//!
//! The engine is pure and total: no I/O, no errors, arbitrary input
//! (including empty text) yields a well-formed score vector.

mod engine;
mod feedback;
pub mod indicators;

pub use engine::ScoreEngine;
pub use feedback::detailed_feedback;
