//! Transport-layer error type

use thiserror::Error;

/// Errors produced by a [`ResourceBackend`](crate::ResourceBackend) call.
///
/// All variants are terminal for the attempt: the transport never retries,
/// the user retries manually by re-invoking the action.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, connect, read).
    #[error("network error: {detail}")]
    Network { detail: String },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("invalid response: {detail}")]
    Parse { detail: String },

    /// The backend answered with a non-2xx status. `message` carries the
    /// backend's `{"error": "..."}` body verbatim when one was present,
    /// otherwise a plain `HTTP <status>` marker.
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Whether the error reflects expected behavior (user input, missing
    /// resource) rather than an infrastructure fault. Drives log level
    /// selection: `warn` when `true`, `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status < 500)
    }
}

/// Transport-layer Result alias
pub type ApiResult<T> = std::result::Result<T, ApiError>;
