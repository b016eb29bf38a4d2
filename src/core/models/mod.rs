//! Domain models for codesift
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Entry`] - A normalized line and its original line number
//! - [`ValidationResult`] - Valid/invalid partition of all entries
//! - [`CountMap`] - Per-code occurrence counts in first-appearance order
//! - [`DuplicateGrouping`] - Markers and group order for duplicate codes
//! - [`Marker`] - The seven-symbol duplicate palette

mod entry;
mod grouping;
mod marker;

pub use entry::{Entry, ValidationResult};
pub use grouping::{CountMap, DuplicateGroup, DuplicateGrouping};
pub use marker::Marker;
