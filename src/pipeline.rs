//! Pipeline boundary - the single entry point into the core
//!
//! Runs classify → group → format over one submitted text. Domain outcomes
//! (invalid, duplicate, unique) are plain values; only unexpected faults
//! surface as [`PipelineError`], and [`process`] swaps those for
//! [`FALLBACK_MESSAGE`] so a single bad request never takes a transport down.
//!
//! # Examples
//!
//! ```
//! use codesift::pipeline;
//!
//! let report = pipeline::process("1. abcd1234efgh5678IJ\n2. short");
//! assert!(report.contains("2. short"));
//! assert!(report.contains("Total unique valid codes: 1"));
//! ```

use std::any::Any;
use std::panic::{self, UnwindSafe};

use log::{debug, error};
use thiserror::Error;

use crate::core::models::{DuplicateGroup, DuplicateGrouping, ValidationResult};
use crate::core::services::{classify, duplicate_groups, format_report, group_duplicates};

/// Reply used in place of a report when the pipeline faults
pub const FALLBACK_MESSAGE: &str = "⚠️ Bot is currently unstable.\n\
                                    Please wait a moment and try again.\n\
                                    \n\
                                    If this continues, redeploy the bot.";

/// Unexpected failures caught at the pipeline boundary
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Submitted bytes were not text
    #[error("input is not valid UTF-8: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),

    /// A panic escaped the core
    #[error("pipeline fault: {0}")]
    Fault(String),
}

/// Everything one pipeline run produced
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Valid/invalid partition
    pub validation: ValidationResult,
    /// Counts, markers and group order
    pub grouping: DuplicateGrouping,
    /// Rendered report
    pub report: String,
}

impl Analysis {
    /// Duplicate groups with their line numbers, in report order
    #[must_use]
    pub fn duplicate_groups(&self) -> Vec<DuplicateGroup> {
        duplicate_groups(&self.validation.valid, &self.grouping)
    }

    /// Distinct valid codes in first-appearance order
    #[must_use]
    pub fn unique_codes(&self) -> Vec<&str> {
        self.grouping.unique_codes()
    }
}

/// Run the whole pipeline over `text`
#[must_use]
pub fn analyze(text: &str) -> Analysis {
    let validation = classify(text);
    let grouping = group_duplicates(&validation.valid);
    let report = format_report(&validation, &grouping);

    debug!(
        "Analyzed {} entries: {} valid, {} invalid, {} duplicate group(s)",
        validation.total(),
        validation.valid.len(),
        validation.invalid.len(),
        grouping.groups_in_order.len()
    );

    Analysis {
        validation,
        grouping,
        report,
    }
}

/// Run `f`, turning a panic into [`PipelineError::Fault`]
pub fn run_guarded<T, F>(f: F) -> Result<T, PipelineError>
where
    F: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(f).map_err(|payload| PipelineError::Fault(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Decode `bytes` and analyze them inside the fault boundary
pub fn try_analyze(bytes: &[u8]) -> Result<Analysis, PipelineError> {
    let text = std::str::from_utf8(bytes)?;
    run_guarded(|| analyze(text))
}

/// Decode `bytes` and render the report inside the fault boundary
pub fn try_process(bytes: &[u8]) -> Result<String, PipelineError> {
    try_analyze(bytes).map(|analysis| analysis.report)
}

/// Render the report for raw bytes, or [`FALLBACK_MESSAGE`] on any fault
///
/// Faults are logged at `error` level for operators.
#[must_use]
pub fn process_bytes(bytes: &[u8]) -> String {
    try_process(bytes).unwrap_or_else(|e| {
        error!("Pipeline error: {e}");
        FALLBACK_MESSAGE.to_string()
    })
}

/// Render the report for `text`, or [`FALLBACK_MESSAGE`] on any fault
#[must_use]
pub fn process(text: &str) -> String {
    process_bytes(text.as_bytes())
}
