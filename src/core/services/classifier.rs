//! Classifier - partitions submitted lines into valid and invalid entries

use crate::core::models::{Entry, ValidationResult};

use super::{is_valid_code, normalize_line};

/// Classify every line of `text` in a single forward pass
///
/// Lines are split on `\n` and numbered from 1. Lines that normalize to an
/// empty string produce no entry at all.
#[must_use]
pub fn classify(text: &str) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (i, line) in text.split('\n').enumerate() {
        let code = normalize_line(line);
        if code.is_empty() {
            continue;
        }

        let entry = Entry::new(i + 1, code);
        if is_valid_code(&entry.code) {
            result.valid.push(entry);
        } else {
            result.invalid.push(entry);
        }
    }

    result
}
