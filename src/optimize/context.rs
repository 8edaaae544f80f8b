//! Context rewrites: role, purpose, and audience framing.

use crate::models::Dimension;
use crate::optimize::base::{Rewrite, Strategy};
use crate::textutil::contains_any_ci;
use anyhow::Result;

/// Phrases whose presence means the prompt already assigns a role.
const ROLE_TRIGGERS: &[&str] = &["you are", "act as", "pretend", "imagine you", "role:"];

/// Phrases whose presence means the prompt already states its purpose.
const PURPOSE_TRIGGERS: &[&str] = &[
    "purpose:",
    "goal:",
    "objective:",
    "for the purpose",
    "in order to",
];

/// Phrases whose presence means the prompt already names an audience.
/// "for" is deliberately broad; almost any prompt that mentions a
/// beneficiary passes this check.
const AUDIENCE_TRIGGERS: &[&str] = &["audience:", "for", "target", "readers", "users"];

const ROLE_LINE: &str = "Context: You are an expert assistant helping with this task.\n\n";
const PURPOSE_LINE: &str =
    "\n\nPurpose: This information will be used to provide accurate and helpful guidance.";
const AUDIENCE_LINE: &str =
    "\n\nAudience: General audience seeking clear and actionable information.";

/// Below this score an audience line is appended as well.
const AUDIENCE_THRESHOLD: f64 = 4.0;

pub struct ContextStrategy;

impl Strategy for ContextStrategy {
    fn dimension(&self) -> Dimension {
        Dimension::Context
    }

    fn description(&self) -> &'static str {
        "Prepends role framing and appends purpose and audience lines"
    }

    fn rewrite(&self, text: &str, score: f64) -> Result<Rewrite> {
        let mut notes = Vec::new();
        let mut out = text.to_string();

        if !contains_any_ci(&out, ROLE_TRIGGERS) {
            out = format!("{ROLE_LINE}{out}");
            notes.push("Added role context".to_string());
        }

        if !contains_any_ci(&out, PURPOSE_TRIGGERS) {
            out.push_str(PURPOSE_LINE);
            notes.push("Added a purpose statement".to_string());
        }

        if score < AUDIENCE_THRESHOLD && !contains_any_ci(&out, AUDIENCE_TRIGGERS) {
            out.push_str(AUDIENCE_LINE);
            notes.push("Added audience context".to_string());
        }

        Ok(Rewrite { text: out, notes })
    }
}
