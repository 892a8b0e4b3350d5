//! Rendering of aggregation results.
//!
//! Supports a plain-text console report, a JSON document, and a debug log dump.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::types::AggregationResult;

/// JSON envelope around a result.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub result: &'a AggregationResult,
}

/// Logs the result using Rust's debug pretty-print format.
pub fn print_pretty(result: &AggregationResult) {
    debug!("{:#?}", result);
}

/// Renders the result as pretty-printed JSON. Ratings keep full precision.
pub fn render_json(result: &AggregationResult) -> Result<String> {
    let report = Report {
        generated_at: Utc::now(),
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Renders the console report.
///
/// The most-reviewed line is omitted when no matched record has a review
/// count, and the unmatched line is omitted when every record matched.
pub fn render_text(result: &AggregationResult) -> String {
    let counts = result
        .count_by_type
        .iter()
        .map(|(kind, count)| format!("{kind}={count}"))
        .collect::<Vec<_>>()
        .join(", ");
    let averages = result
        .average_rating_by_type
        .iter()
        .map(|(kind, avg)| format!("{kind}={}", display_rating(*avg)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("Valid Points Per Type: {{{counts}}}"),
        format!("Average Rating Per Type: {{{averages}}}"),
    ];

    if let Some(top) = &result.most_reviewed {
        lines.push(format!(
            "Location with highest reviews: {} ({} reviews)",
            top.id,
            top.review_count.unwrap_or_default()
        ));
    }

    if !result.unmatched_ids.is_empty() {
        lines.push(format!(
            "Locations with incomplete data: [{}]",
            result.unmatched_ids.join(", ")
        ));
    }

    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Rounds to at most two decimals for display and drops trailing zeros.
fn display_rating(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
