//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use chrono::{DateTime, Utc};
use log::debug;

use crate::bot::{GREETING, PING_REPLY};
use crate::output::AnalysisSummary;
use crate::pipeline;

use super::error::ApiError;
use super::types::{CheckRequest, PingData};

// =============================================================================
// STATIC
// =============================================================================

/// Greeting/help text
#[must_use]
pub const fn greeting() -> &'static str {
    GREETING
}

/// Liveness check
#[must_use]
pub fn ping(started_at: DateTime<Utc>) -> PingData {
    PingData {
        status: "ok".to_string(),
        message: PING_REPLY.to_string(),
        version: crate::VERSION.to_string(),
        started_at: started_at.to_rfc3339(),
    }
}

// =============================================================================
// CHECK
// =============================================================================

/// Analyze a submitted list
///
/// An empty `text` is a valid request and yields the empty report.
pub fn check_codes(req: &CheckRequest) -> Result<AnalysisSummary, ApiError> {
    debug!("Checking {} byte(s) of submitted text", req.text.len());
    let analysis = pipeline::try_analyze(req.text.as_bytes())?;
    Ok(AnalysisSummary::from(&analysis))
}

/// Analyze a raw body and return the report text, or the fallback message
#[must_use]
pub fn check_raw(body: &[u8]) -> String {
    pipeline::process_bytes(body)
}
