//! JSON reporter
//!
//! Outputs all results as pretty-printed JSON with a generation
//! timestamp. Useful for machine consumption, piping to jq, or further
//! processing.

use crate::models::PromptReport;
use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    results: &'a [PromptReport],
}

/// Render reports as JSON
pub fn render(reports: &[PromptReport]) -> Result<String> {
    let document = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        results: reports,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
