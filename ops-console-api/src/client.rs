//! reqwest implementation of [`ResourceBackend`]

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;
use crate::http;
use crate::traits::ResourceBackend;
use crate::types::{self, ListEnvelope, ListQuery};

/// REST client for the admin console backend.
///
/// Holds the base URL and an optional bearer token; paths are built per
/// resource from its prefix. One instance is shared by every controller.
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    /// Create a client for the given base URL (trailing slash is stripped).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Attach a bearer token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Build the path for a list request: `{prefix}/list?page=&limit=[&search=]`.
fn list_path(prefix: &str, query: &ListQuery) -> String {
    let mut path = format!("{prefix}/list?page={}&limit={}", query.page, query.page_size);
    if let Some(term) = query.search.as_deref() {
        if !term.is_empty() {
            path.push_str("&search=");
            path.push_str(&urlencoding::encode(term));
        }
    }
    path
}

#[async_trait]
impl ResourceBackend for RestClient {
    async fn list(
        &self,
        prefix: &str,
        list_key: &str,
        query: &ListQuery,
    ) -> ApiResult<ListEnvelope> {
        let path = list_path(prefix, query);
        let request = self.authed(self.client.get(self.url(&path)));
        let (status, body) = http::execute(request, "GET", &path).await?;
        http::check_status(status, &body)?;
        types::parse_envelope(&body, list_key)
    }

    async fn create(&self, prefix: &str, body: &Value) -> ApiResult<()> {
        let request = self.authed(self.client.post(self.url(prefix)).json(body));
        let (status, body) = http::execute(request, "POST", prefix).await?;
        http::check_status(status, &body)
    }

    async fn update(&self, prefix: &str, id: &str, body: &Value) -> ApiResult<()> {
        let path = format!("{prefix}/{id}");
        let request = self.authed(self.client.put(self.url(&path)).json(body));
        let (status, body) = http::execute(request, "PUT", &path).await?;
        http::check_status(status, &body)
    }

    async fn delete(&self, prefix: &str, id: &str) -> ApiResult<()> {
        let path = format!("{prefix}/{id}");
        let request = self.authed(self.client.delete(self.url(&path)));
        let (status, body) = http::execute(request, "DELETE", &path).await?;
        http::check_status(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_without_search() {
        let query = ListQuery {
            page: 2,
            page_size: 10,
            search: None,
        };
        assert_eq!(
            list_path("/api/channel", &query),
            "/api/channel/list?page=2&limit=10"
        );
    }

    #[test]
    fn list_path_encodes_search() {
        let query = ListQuery {
            page: 1,
            page_size: 20,
            search: Some("dev server".into()),
        };
        assert_eq!(
            list_path("/api/physical_server", &query),
            "/api/physical_server/list?page=1&limit=20&search=dev%20server"
        );
    }

    #[test]
    fn empty_search_is_omitted() {
        let query = ListQuery {
            page: 1,
            page_size: 10,
            search: Some(String::new()),
        };
        assert_eq!(
            list_path("/api/note", &query),
            "/api/note/list?page=1&limit=10"
        );
    }

    #[test]
    fn base_url_trailing_slash_stripped() {
        let client = RestClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/dict/1"), "http://localhost:8080/api/dict/1");
    }
}
