//! Backend contract every admin resource follows

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;
use crate::types::{ListEnvelope, ListQuery};

/// Uniform CRUD contract against a backend the client does not own.
///
/// Records cross this boundary as opaque JSON; the client never validates
/// their schema beyond what its form declares. Implementations must not
/// retry: errors are terminal per attempt and surfaced to the caller.
#[async_trait]
pub trait ResourceBackend: Send + Sync {
    /// Fetch one page of records.
    ///
    /// `list_key` names the array inside the response envelope
    /// (`{ "<listKey>": [...], "total": n }`).
    async fn list(&self, prefix: &str, list_key: &str, query: &ListQuery)
        -> ApiResult<ListEnvelope>;

    /// Create a record. The body carries no id.
    async fn create(&self, prefix: &str, body: &Value) -> ApiResult<()>;

    /// Update the record at `{prefix}/{id}`.
    async fn update(&self, prefix: &str, id: &str, body: &Value) -> ApiResult<()>;

    /// Delete the record at `{prefix}/{id}`. The response body is ignored.
    async fn delete(&self, prefix: &str, id: &str) -> ApiResult<()>;
}
