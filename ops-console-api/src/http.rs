//! Shared HTTP request plumbing
//!
//! One place for sending requests, logging and turning non-2xx statuses
//! into [`ApiError`]. Deliberately no retry and no timeout: every admin
//! action is fire-and-forget from the user's point of view.

use reqwest::RequestBuilder;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Maximum number of bytes of a response body included in debug logs.
const LOG_BODY_LIMIT: usize = 256;

/// Send a prepared request and return `(status, body)`.
///
/// Transport failures (connect, read) map to [`ApiError::Network`]; the
/// status code is returned as-is for the caller to judge.
pub async fn execute(request: RequestBuilder, method: &str, path: &str) -> ApiResult<(u16, String)> {
    log::debug!("{method} {path}");

    let response = request.send().await.map_err(|e| ApiError::Network {
        detail: e.to_string(),
    })?;

    let status = response.status().as_u16();
    log::debug!("{method} {path} -> {status}");

    let body = response.text().await.map_err(|e| ApiError::Network {
        detail: format!("failed to read response body: {e}"),
    })?;
    log::debug!("response body: {}", truncate_body(&body));

    Ok((status, body))
}

/// Map a non-2xx status to [`ApiError::Status`]; 2xx passes through.
///
/// The status class alone decides success. When the error body carries the
/// conventional `{"error": "..."}` shape, that message is surfaced verbatim.
pub fn check_status(status: u16, body: &str) -> ApiResult<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = error_message(status, body);
    if status < 500 {
        log::warn!("backend rejected request (HTTP {status}): {message}");
    } else {
        log::error!("backend failure (HTTP {status}): {message}");
    }
    Err(ApiError::Status { status, message })
}

/// Extract the backend's error message from a non-2xx body.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| format!("HTTP {status}"))
}

/// Truncate a response body for logging, keeping char boundaries intact.
fn truncate_body(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_owned();
    }
    let cut: String = body.chars().take(LOG_BODY_LIMIT).collect();
    format!("{cut}... ({} bytes total)", body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_statuses_pass() {
        assert!(check_status(200, "").is_ok());
        assert!(check_status(201, "{}").is_ok());
        assert!(check_status(204, "").is_ok());
    }

    #[test]
    fn error_body_message_surfaced_verbatim() {
        let err = check_status(400, r#"{"error":"name is required"}"#);
        match err {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "name is required");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_error_body_falls_back_to_status() {
        let err = check_status(502, "<html>bad gateway</html>");
        match err {
            Err(ApiError::Status { message, .. }) => assert_eq!(message, "HTTP 502"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn short_body_not_truncated() {
        assert_eq!(truncate_body("hello"), "hello");
    }

    #[test]
    fn long_body_truncated_with_length() {
        let body = "x".repeat(LOG_BODY_LIMIT + 50);
        let out = truncate_body(&body);
        assert!(out.contains("bytes total"));
        assert!(out.len() < body.len());
    }

    #[test]
    fn multibyte_body_truncated_on_char_boundary() {
        let body = "界".repeat(LOG_BODY_LIMIT);
        let out = truncate_body(&body);
        assert!(out.contains("bytes total"));
    }
}
