//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::Cursor;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use codesift::api::{self, ApiError, ApiResponse, CheckRequest};

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

/// A routed response before conversion to tiny_http
#[derive(Debug)]
struct Routed {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve requests on `addr` until the process is stopped
///
/// Requests are handled one at a time; every pipeline run is independent.
pub fn run(addr: &str) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow!("Failed to start server on {addr}: {e}"))?;
    let started_at = Utc::now();
    info!("HTTP endpoint listening on {addr}");

    for mut request in server.incoming_requests() {
        let response = handle_request(&mut request, started_at);
        if let Err(e) = request.respond(response) {
            warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

fn handle_request(request: &mut Request, started_at: DateTime<Utc>) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or_default();

    let mut body = Vec::new();
    let routed = match request.as_reader().read_to_end(&mut body) {
        Ok(_) => route(&method, path, &body, started_at),
        Err(e) => error_reply(&ApiError::bad_request(format!("Failed to read request body: {e}"))),
    };

    debug!("{method} {path} -> {}", routed.status);
    into_response(routed)
}

// =============================================================================
// ROUTING
// =============================================================================

/// Map a request to a response
///
/// Supports both /api/v1/... (versioned) and /api/... paths.
fn route(method: &Method, path: &str, body: &[u8], started_at: DateTime<Utc>) -> Routed {
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);

    match (method, api_path) {
        (&Method::Get, "/") => text_reply(200, api::greeting()),
        (&Method::Get, "/ping") => success_reply(api::ping(started_at)),

        // POST /api/check - JSON in, JSON out
        (&Method::Post, "/check") => match parse_json::<CheckRequest>(body) {
            Ok(req) => match api::check_codes(&req) {
                Ok(data) => success_reply(data),
                Err(e) => error_reply(&e),
            },
            Err(e) => error_reply(&e),
        },

        // POST /api/check/raw - raw list in, report text out
        (&Method::Post, "/check/raw") => text_reply(200, &api::check_raw(body)),

        _ => error_reply(&ApiError::not_found(format!("Endpoint not found: {method} {path}"))),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Parse a JSON request body
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Create a successful JSON response
fn success_reply<T: Serialize>(data: T) -> Routed {
    json_reply(&ApiResponse::success(data), 200)
}

/// Create an error JSON response with appropriate status code
fn error_reply(error: &ApiError) -> Routed {
    json_reply(&ApiResponse::<()>::error(error), error.status_code())
}

fn json_reply<T: Serialize>(data: &T, status: u16) -> Routed {
    let json = serde_json::to_vec(data).unwrap_or_else(|_| br#"{"success":false}"#.to_vec());
    Routed {
        status,
        content_type: JSON,
        body: json,
    }
}

fn text_reply(status: u16, text: &str) -> Routed {
    Routed {
        status,
        content_type: TEXT,
        body: text.as_bytes().to_vec(),
    }
}

fn into_response(routed: Routed) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_data(routed.body).with_status_code(StatusCode(routed.status));
    match Header::from_bytes("Content-Type", routed.content_type) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
