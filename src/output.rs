//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{DuplicateGroup, Entry};
use crate::pipeline::Analysis;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of analyzing one submitted list
#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    /// Lines that produced an entry
    pub entries: usize,
    /// Number of well-formed codes, duplicates included
    pub valid_count: usize,
    /// Number of malformed lines
    pub invalid_count: usize,
    /// Number of distinct well-formed codes
    pub unique_count: usize,
    /// Malformed lines with their original numbers
    pub invalid: Vec<Entry>,
    /// Duplicate groups in first-appearance order
    pub duplicates: Vec<DuplicateGroup>,
    /// Distinct codes in first-appearance order
    pub unique_codes: Vec<String>,
    /// The rendered report
    pub report: String,
}

impl From<&Analysis> for AnalysisSummary {
    fn from(analysis: &Analysis) -> Self {
        let unique_codes: Vec<String> =
            analysis.unique_codes().into_iter().map(String::from).collect();

        Self {
            entries: analysis.validation.total(),
            valid_count: analysis.validation.valid.len(),
            invalid_count: analysis.validation.invalid.len(),
            unique_count: unique_codes.len(),
            invalid: analysis.validation.invalid.clone(),
            duplicates: analysis.duplicate_groups(),
            unique_codes,
            report: analysis.report.clone(),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl AnalysisSummary {
    /// Render the result based on output mode
    ///
    /// With `stats`, human mode also writes a one-line summary to stderr so
    /// stdout stays exactly the report.
    pub fn render(&self, mode: OutputMode, stats: bool) {
        match mode {
            OutputMode::Human => self.render_human(stats),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self, stats: bool) {
        println!("{}", self.report);
        if stats {
            eprintln!("{}", self.stats_line());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Colored one-line count summary
    #[must_use]
    pub fn stats_line(&self) -> String {
        format!(
            "{} lines: {} valid, {} invalid, {} duplicate group(s), {} unique",
            self.entries,
            self.valid_count.to_string().green(),
            self.invalid_count.to_string().red(),
            self.duplicates.len().to_string().yellow(),
            self.unique_count.to_string().bold()
        )
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
