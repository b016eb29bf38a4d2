//! Occurrence counts and duplicate grouping

use std::collections::HashMap;

use serde::Serialize;

use super::Marker;

/// Occurrence count per code, iterable in first-appearance order
///
/// `HashMap` gives no iteration order, so the first-seen keys are kept in a
/// separate list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl CountMap {
    /// Create an empty count map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `code`
    pub fn increment(&mut self, code: &str) {
        if let Some(count) = self.counts.get_mut(code) {
            *count += 1;
        } else {
            self.order.push(code.to_string());
            self.counts.insert(code.to_string(), 1);
        }
    }

    /// Occurrences of `code` (0 when never seen)
    #[must_use]
    pub fn count(&self, code: &str) -> usize {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Distinct codes in first-appearance order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(code, count)` pairs in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.keys().map(|code| (code, self.count(code)))
    }

    /// Number of distinct codes
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no code was counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Result of duplicate grouping over the valid entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateGrouping {
    /// Occurrences of every valid code
    pub counts: CountMap,
    /// Marker per duplicate code
    pub markers: HashMap<String, Marker>,
    /// Duplicate codes ordered by first appearance among valid entries
    pub groups_in_order: Vec<String>,
}

impl DuplicateGrouping {
    /// Marker assigned to `code`, if it is a duplicate
    #[must_use]
    pub fn marker_for(&self, code: &str) -> Option<Marker> {
        self.markers.get(code).copied()
    }

    /// Whether any code occurs more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.markers.is_empty()
    }

    /// Distinct valid codes in first-appearance order
    #[must_use]
    pub fn unique_codes(&self) -> Vec<&str> {
        self.counts.keys().collect()
    }
}

/// Machine-readable view of one duplicate group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// The duplicated code
    pub code: String,
    /// Marker shared by every line of the group
    pub marker: Marker,
    /// Original line numbers of every occurrence, ascending
    pub lines: Vec<usize>,
}
