// crates/client/src/lib.rs
//! HTTP client for the archive server's `/search` endpoint.
//!
//! One request shape: `GET {base_url}/search?query={percent-encoded}`. No
//! extra parameters, headers, or body. The response is a JSON array of
//! [`SearchResult`]s; anything else is classified into the three-way error
//! taxonomy in [`error::SearchError`].

pub mod error;

pub use error::SearchError;

use archive_view_types::SearchResult;

/// Client for one archive server, cheap to clone per reqwest's own pooling.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client for the server at `base_url` (scheme + authority,
    /// with or without a trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The exact request URL for `query`.
    ///
    /// The query lands in a single `query` parameter, percent-encoded with
    /// the RFC 3986 unreserved set: spaces become `%20` (never `+`), `&` and
    /// `?` are escaped, non-ASCII is encoded as UTF-8 octets. Callers pass
    /// the already-trimmed query; no further normalization happens here.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}/search?query={}", self.base_url, urlencoding::encode(query))
    }

    /// Execute one search request.
    ///
    /// Classification:
    /// - the request never completes (connect, TLS, interrupted body) →
    ///   [`SearchError::Transport`]
    /// - non-success HTTP status → [`SearchError::Response`]
    /// - body is not a JSON array of results → [`SearchError::Parse`]
    ///
    /// The body is read as text and deserialized explicitly so that a broken
    /// body stream stays a transport error and only actual deserialization
    /// failures become parse errors.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.search_url(query);
        tracing::debug!(%url, "issuing search request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(SearchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Response {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(SearchError::transport)?;
        serde_json::from_str(&body).map_err(SearchError::parse)
    }
}
