//! Entries and the valid/invalid partition
//!
//! An entry ties a normalized line back to its original 1-based position.

use serde::Serialize;

/// A normalized, non-empty input line and its original position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// 1-based line number in the submitted text
    pub index: usize,
    /// Normalized line content
    pub code: String,
}

impl Entry {
    /// Create a new entry
    #[must_use]
    pub fn new(index: usize, code: impl Into<String>) -> Self {
        Self {
            index,
            code: code.into(),
        }
    }
}

/// Partition of every non-empty normalized line into valid and invalid entries
///
/// Both sequences keep original line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Entries whose code has the required shape
    pub valid: Vec<Entry>,
    /// Entries whose code does not
    pub invalid: Vec<Entry>,
}

impl ValidationResult {
    /// Number of entries across both sequences
    #[must_use]
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Whether no line produced an entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }
}
