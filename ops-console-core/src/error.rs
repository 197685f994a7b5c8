//! Unified error type definition

use thiserror::Error;

// Re-export transport error type
pub use ops_console_api::ApiError;

/// Core layer error type.
///
/// Every variant is terminal for the attempt: errors are logged, surfaced
/// through the notification sink and never retried. The console stays
/// interactive after any of them.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Fetching a list page failed; prior list state is left untouched.
    #[error("load failed: {0}")]
    Load(ApiError),

    /// A declared required field is empty; no network call was issued.
    #[error("required field missing: {field}")]
    Validation { field: &'static str },

    /// Create or update was rejected; the panel stays open.
    #[error("save failed: {0}")]
    Save(ApiError),

    /// Delete was rejected.
    #[error("delete failed: {0}")]
    Delete(ApiError),

    /// A submit or remove was issued while a prior one is still pending.
    #[error("operation already in flight")]
    OperationInFlight,
}

impl ConsoleError {
    /// Whether it is expected behavior (user input, resource does not exist,
    /// etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::OperationInFlight => true,
            Self::Load(e) | Self::Save(e) | Self::Delete(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;
