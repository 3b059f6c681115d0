//! Date-reviving request-body transform.
//!
//! JSON request bodies frequently carry `DD-MM-YYYY` strings from upstream
//! forms. This middleware rewrites every such field (recursively, through
//! objects and arrays) to ISO `YYYY-MM-DD`, so handlers deserialize them
//! straight into `chrono::NaiveDate`. Strings that merely look like dates
//! but name no real calendar day, and everything else, pass through
//! untouched. Non-JSON bodies are not inspected.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Request bodies above this size are rejected before parsing.
pub const BODY_LIMIT: usize = 1024 * 1024;

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("date pattern is valid"));

/// Rewrite a single string if it is a real `DD-MM-YYYY` date.
fn revive_string(raw: &str) -> Option<String> {
    if !DATE_PATTERN.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%d-%m-%Y")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Recursively revive date strings inside a JSON value.
pub fn revive_dates(value: &mut Value) {
    match value {
        Value::String(s) => {
            if let Some(revived) = revive_string(s) {
                *s = revived;
            }
        }
        Value::Array(items) => {
            for item in items {
                revive_dates(item);
            }
        }
        Value::Object(fields) => {
            for (_, field) in fields {
                revive_dates(field);
            }
        }
        _ => {}
    }
}

/// Axum middleware applying [`revive_dates`] to JSON request bodies.
pub async fn revive_request_dates(request: Request, next: Next) -> Response {
    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if !is_json {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };

    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(mut value) => {
            revive_dates(&mut value);
            match serde_json::to_vec(&value) {
                Ok(rewritten) => {
                    parts.headers.insert(CONTENT_LENGTH, rewritten.len().into());
                    Body::from(rewritten)
                }
                Err(_) => Body::from(bytes),
            }
        }
        // Malformed JSON is the handler extractor's problem, not ours.
        Err(_) => Body::from(bytes),
    };

    next.run(Request::from_parts(parts, body)).await
}
