//! CSV reporter
//!
//! One row per analyzed prompt. Scores are written with one decimal
//! place and feedback lists are joined with "; ". Fields are quoted per
//! RFC 4180 when they contain commas, quotes, or newlines.

use crate::models::PromptReport;
use anyhow::Result;

const HEADER: &str = "original_prompt,optimized_prompt,overall_score,clarity_score,\
                      specificity_score,structure_score,context_score,creativity_score,\
                      strengths,weaknesses,suggestions";

/// Render reports as CSV
pub fn render(reports: &[PromptReport]) -> Result<String> {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for report in reports {
        let scores = &report.scores;
        let fields = [
            quote(&report.original_prompt),
            quote(&report.optimized_prompt),
            format!("{:.1}", scores.overall),
            format!("{:.1}", scores.clarity),
            format!("{:.1}", scores.specificity),
            format!("{:.1}", scores.structure),
            format!("{:.1}", scores.context),
            format!("{:.1}", scores.creativity),
            quote(&report.feedback.strengths.join("; ")),
            quote(&report.feedback.weaknesses.join("; ")),
            quote(&report.feedback.suggestions.join("; ")),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    Ok(out)
}

/// Quote a field if it contains a delimiter, quote, or newline.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
