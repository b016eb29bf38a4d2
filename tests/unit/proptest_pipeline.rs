//! Property-based tests for the pipeline
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::HashSet;

use codesift::core::services::{is_valid_code, normalize_line};
use codesift::pipeline;
use proptest::prelude::*;

/// A line that is either a code, a numbered code, noise or blank
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9]{18}",
        "[A-C]{18}",
        ("[0-9]{1,3}", "[.)\\-]?", "[A-Za-z]{18}").prop_map(|(n, sep, c)| format!("{n}{sep} {c}")),
        "[A-Za-z0-9 _-]{0,25}",
        Just(String::new()),
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..40).prop_map(|lines| lines.join("\n"))
}

proptest! {
    /// Every non-empty normalized line lands in exactly one partition
    #[test]
    fn partition_covers_non_empty_lines(text in text_strategy()) {
        let analysis = pipeline::analyze(&text);
        let expected = text.split('\n').filter(|l| !normalize_line(l).is_empty()).count();
        prop_assert_eq!(analysis.validation.total(), expected);
    }

    /// Valid entries are well-formed, invalid ones are not
    #[test]
    fn partition_respects_validity(text in text_strategy()) {
        let analysis = pipeline::analyze(&text);
        prop_assert!(analysis.validation.valid.iter().all(|e| is_valid_code(&e.code)));
        prop_assert!(analysis.validation.invalid.iter().all(|e| !is_valid_code(&e.code)));
    }

    /// Line numbers are 1-based and increasing in both partitions
    #[test]
    fn line_numbers_increase(text in text_strategy()) {
        let analysis = pipeline::analyze(&text);
        for entries in [&analysis.validation.valid, &analysis.validation.invalid] {
            prop_assert!(entries.iter().all(|e| e.index >= 1));
            prop_assert!(entries.windows(2).all(|w| w[0].index < w[1].index));
        }
    }

    /// Counts sum to the number of valid entries
    #[test]
    fn counts_sum_to_valid_entries(text in text_strategy()) {
        let analysis = pipeline::analyze(&text);
        prop_assert_eq!(analysis.grouping.counts.total(), analysis.validation.valid.len());
    }

    /// Unique codes are the distinct valid codes, each once
    #[test]
    fn unique_codes_are_distinct(text in text_strategy()) {
        let analysis = pipeline::analyze(&text);
        let unique = analysis.unique_codes();
        let distinct: HashSet<&str> =
            analysis.validation.valid.iter().map(|e| e.code.as_str()).collect();

        prop_assert_eq!(unique.len(), distinct.len());
        prop_assert_eq!(unique.iter().copied().collect::<HashSet<_>>(), distinct);
    }

    /// Only codes seen more than once get a marker
    #[test]
    fn markers_only_for_duplicates(text in text_strategy()) {
        let analysis = pipeline::analyze(&text);
        for (code, count) in analysis.grouping.counts.iter() {
            prop_assert_eq!(analysis.grouping.marker_for(code).is_some(), count > 1);
        }
    }

    /// Same input, same report
    #[test]
    fn report_is_deterministic(text in text_strategy()) {
        prop_assert_eq!(pipeline::process(&text), pipeline::process(&text));
    }

    /// The report always has its three sections in order
    #[test]
    fn report_sections_in_order(text in text_strategy()) {
        let report = pipeline::process(&text);
        let invalid = report.find("❌ Invalid codes:");
        let duplicates = report.find("🎨 Duplicate check:");
        let summary = report.find("✅ Total unique valid codes:");

        prop_assert_eq!(invalid, Some(0));
        prop_assert!(duplicates.is_some() && summary.is_some());
        prop_assert!(duplicates < summary);
    }
}
