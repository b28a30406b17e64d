//! Context7 query client.
//!
//! Context7 indexes docs.dokploy.com; one POST per corpus file pulls the
//! freshest markdown for that topic.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{FetchError, QueryFn, QueryFuture};

pub const DEFAULT_BASE_URL: &str = "https://api.context7.com/v1";
pub const LIBRARY_ID: &str = "/dokploy/website";

/// Token budget requested per query.
pub const MAX_TOKENS: u32 = 8000;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    library_id: &'a str,
    query: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct QueryResponse {
    content: Option<String>,
}

/// HTTP client for the Context7 documentation index.
#[derive(Debug, Clone)]
pub struct Context7Client {
    http: reqwest::Client,
    base_url: String,
}

impl Context7Client {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Runs one query, returning the markdown payload if the response
    /// carried one.
    ///
    /// # Errors
    /// Returns [`FetchError::Http`] on a non-success status and
    /// [`FetchError::Transport`] when the request or body decode fails.
    pub async fn query(&self, query: &str) -> Result<Option<String>, FetchError> {
        let url = format!("{}/query", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&QueryRequest {
                library_id: LIBRARY_ID,
                query,
                max_tokens: MAX_TOKENS,
            })
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        Ok(body.content)
    }

    /// Wraps the client as an injected query capability for
    /// [`crate::refresh_corpus`].
    #[must_use]
    pub fn into_query_fn(self) -> QueryFn {
        Arc::new(move |query: String| -> QueryFuture {
            let client = self.clone();
            Box::pin(async move { client.query(&query).await })
        })
    }
}

impl Default for Context7Client {
    fn default() -> Self {
        Self::new()
    }
}
