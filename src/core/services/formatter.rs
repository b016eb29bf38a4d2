//! Report formatter - renders classification and grouping as chat-ready text
//!
//! The report has three fixed sections (invalid codes, duplicate check, final
//! summary) and ends with a fenced block holding the unique codes so a chat
//! client renders it monospace with a copy button.

use std::fmt::Write as _;

use crate::core::models::{DuplicateGrouping, ValidationResult};

/// Header of the invalid codes section
pub const INVALID_HEADER: &str = "❌ Invalid codes:";
/// Line shown when every code is well-formed
pub const NO_INVALID: &str = "✅ No invalid code";
/// Header of the duplicate section
pub const DUPLICATE_HEADER: &str = "🎨 Duplicate check:";
/// Line shown when no code repeats
pub const NO_DUPLICATE: &str = "✅ No duplicate code";
/// Hint printed above the code block
pub const COPY_HINT: &str = "📋 Tap the copy icon to copy all codes";

/// Render the full report
///
/// Pure and deterministic: iteration only ever follows the entry sequences
/// and the first-appearance lists, never a hash map.
#[must_use]
pub fn format_report(validation: &ValidationResult, grouping: &DuplicateGrouping) -> String {
    let mut out = String::new();

    out.push_str(INVALID_HEADER);
    out.push('\n');
    if validation.invalid.is_empty() {
        out.push_str(NO_INVALID);
        out.push('\n');
    } else {
        for entry in &validation.invalid {
            let _ = writeln!(out, "{}. {}", entry.index, entry.code);
        }
    }
    out.push('\n');

    out.push_str(DUPLICATE_HEADER);
    out.push('\n');
    if grouping.has_duplicates() {
        for code in &grouping.groups_in_order {
            let Some(marker) = grouping.marker_for(code) else {
                continue;
            };
            for entry in validation.valid.iter().filter(|e| &e.code == code) {
                let _ = writeln!(out, "{}. {} {marker}", entry.index, entry.code);
            }
            out.push('\n');
        }
    } else {
        out.push_str(NO_DUPLICATE);
        out.push('\n');
    }
    out.push('\n');

    let unique = grouping.unique_codes();
    let _ = writeln!(out, "✅ Total unique valid codes: {}", unique.len());
    out.push_str(COPY_HINT);
    out.push_str("\n\n");

    out.push_str("```text\n");
    for code in unique {
        out.push_str(code);
        out.push('\n');
    }
    out.push_str("```");

    out
}
