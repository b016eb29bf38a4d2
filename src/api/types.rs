//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData::from(error)),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for checking a code list
#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    /// The submitted list, one code per line
    #[serde(default)]
    pub text: String,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Liveness endpoint response data
#[derive(Debug, Serialize)]
pub struct PingData {
    /// Always `ok` when the service answers
    pub status: String,
    /// Heartbeat text shown to chat users
    pub message: String,
    /// Crate version
    pub version: String,
    /// When the service started (RFC3339)
    pub started_at: String,
}
