//! REST transport layer for the ops console client core.
//!
//! Every admin resource in the console follows the same backend contract:
//! a paginated `GET {prefix}/list`, a `POST {prefix}` to create, a
//! `PUT {prefix}/{id}` to update and a `DELETE {prefix}/{id}` to remove.
//! This crate defines that contract as the [`ResourceBackend`] trait and
//! ships a reqwest-based implementation, [`RestClient`].
//!
//! Failure semantics are deliberately simple: no retries, no configured
//! timeouts. An error is terminal for the attempt and the caller decides
//! whether to try again.

pub mod client;
pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use client::RestClient;
pub use error::{ApiError, ApiResult};
pub use traits::ResourceBackend;
pub use types::{ListEnvelope, ListQuery, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
