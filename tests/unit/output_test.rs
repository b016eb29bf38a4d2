//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use codesift::output::{AnalysisSummary, OperationResult, OutputMode};
use codesift::pipeline;

use crate::common::{code, numbered};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// AnalysisSummary Tests
// =============================================================================

#[test]
fn summary_counts() {
    let text = numbered(&[&code(1), "bad", &code(2), &code(1), "", &code(1)]);
    let summary = AnalysisSummary::from(&pipeline::analyze(&text));

    assert_eq!(summary.entries, 5);
    assert_eq!(summary.valid_count, 4);
    assert_eq!(summary.invalid_count, 1);
    assert_eq!(summary.unique_count, 2);
    assert_eq!(summary.unique_codes, vec![code(1), code(2)]);
    assert_eq!(summary.duplicates.len(), 1);
    assert_eq!(summary.duplicates[0].lines, vec![1, 4, 6]);
}

#[test]
fn summary_serialization() {
    let text = numbered(&[&code(7), "x", &code(7)]);
    let summary = AnalysisSummary::from(&pipeline::analyze(&text));

    let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["entries"], 3);
    assert_eq!(json["invalid"][0]["index"], 2);
    assert_eq!(json["invalid"][0]["code"], "x");
    assert_eq!(json["duplicates"][0]["code"], code(7));
    assert_eq!(json["duplicates"][0]["marker"], "red");
    assert_eq!(json["duplicates"][0]["lines"], serde_json::json!([1, 3]));
    assert_eq!(json["unique_codes"], serde_json::json!([code(7)]));
    assert!(json["report"].as_str().unwrap().starts_with("❌ Invalid codes:"));
}

#[test]
fn empty_summary() {
    let summary = AnalysisSummary::from(&pipeline::analyze(""));

    assert_eq!(summary.entries, 0);
    assert!(summary.invalid.is_empty());
    assert!(summary.duplicates.is_empty());
    assert!(summary.unique_codes.is_empty());
}

#[test]
fn stats_line_mentions_every_count() {
    colored::control::set_override(false);
    let text = numbered(&[&code(1), &code(1), "nope"]);
    let summary = AnalysisSummary::from(&pipeline::analyze(&text));

    assert_eq!(
        summary.stats_line(),
        "3 lines: 2 valid, 1 invalid, 1 duplicate group(s), 1 unique"
    );
}

// =============================================================================
// OperationResult Tests
// =============================================================================

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: false,
        message: pipeline::FALLBACK_MESSAGE.to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":false"));
    assert!(json.contains("Bot is currently unstable"));
}
