//! Duplicate grouper - counts codes and marks the ones that repeat
//!
//! Groups are ordered by first appearance among the valid entries, never by
//! count or alphabetically, so the report lists duplicates in the order the
//! user typed them.

use std::collections::{HashMap, HashSet};

use crate::core::models::{CountMap, DuplicateGroup, DuplicateGrouping, Entry, Marker};

/// Count, mark and order duplicate codes among `valid` entries
#[must_use]
pub fn group_duplicates(valid: &[Entry]) -> DuplicateGrouping {
    let mut counts = CountMap::new();
    for entry in valid {
        counts.increment(&entry.code);
    }

    let mut markers = HashMap::new();
    let mut next_marker = 0;
    for (code, count) in counts.iter() {
        if count > 1 {
            markers.insert(code.to_string(), Marker::nth(next_marker));
            next_marker += 1;
        }
    }

    // Re-derive group order from the entries rather than from the map
    let mut seen = HashSet::new();
    let mut groups_in_order = Vec::new();
    for entry in valid {
        if markers.contains_key(&entry.code) && seen.insert(entry.code.as_str()) {
            groups_in_order.push(entry.code.clone());
        }
    }

    DuplicateGrouping {
        counts,
        markers,
        groups_in_order,
    }
}

/// Expand a grouping into one [`DuplicateGroup`] per duplicate code, in group order
#[must_use]
pub fn duplicate_groups(valid: &[Entry], grouping: &DuplicateGrouping) -> Vec<DuplicateGroup> {
    grouping
        .groups_in_order
        .iter()
        .filter_map(|code| {
            let marker = grouping.marker_for(code)?;
            let lines = valid.iter().filter(|e| &e.code == code).map(|e| e.index).collect();
            Some(DuplicateGroup {
                code: code.clone(),
                marker,
                lines,
            })
        })
        .collect()
}
