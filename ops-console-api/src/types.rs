//! Pagination request/response types shared by all resources

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Page size used when a controller does not override it.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound applied to client-supplied page sizes.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters for list endpoints.
///
/// Pages are 1-indexed. An empty `search` term is treated as absent.
///
/// # Default
///
/// The default is `page = 1, page_size = DEFAULT_PAGE_SIZE`, no search term.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Optional keyword forwarded as the `search` query parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl ListQuery {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    /// - `search` is preserved as-is
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
            search: self.search.clone(),
        }
    }
}

/// One raw page of records as returned by a list endpoint.
///
/// The wire format is `{ "<listKey>": [...], "total": n }` where the list
/// key varies per resource (`channels`, `roles`, `servers`, ...). Items stay
/// opaque JSON at this layer; the core crate decodes them into typed records.
#[derive(Debug, Clone, Default)]
pub struct ListEnvelope {
    /// Records in the requested page.
    pub items: Vec<Value>,
    /// Total number of records across all pages.
    pub total: u64,
}

/// Parse a list response body.
///
/// Accepts the canonical envelope, and falls back to a bare JSON array for
/// the handful of legacy endpoints that return one (`total` is then the
/// array length).
pub fn parse_envelope(body: &str, list_key: &str) -> ApiResult<ListEnvelope> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Parse {
        detail: e.to_string(),
    })?;

    if let Value::Array(items) = value {
        let total = items.len() as u64;
        return Ok(ListEnvelope { items, total });
    }

    let items = match value.get(list_key) {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            return Err(ApiError::Parse {
                detail: format!("expected array under key '{list_key}', got {other}"),
            })
        }
    };
    let total = value
        .get("total")
        .and_then(Value::as_u64)
        .unwrap_or(items.len() as u64);

    Ok(ListEnvelope { items, total })
}
