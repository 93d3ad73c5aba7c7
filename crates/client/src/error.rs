// crates/client/src/error.rs
use thiserror::Error;

/// Errors that can occur after a search request has been dispatched.
///
/// All three kinds collapse to the same user-facing message; they are
/// distinguished only in the diagnostic log. Pre-flight validation (empty
/// query) is handled before a client is ever involved and has no variant
/// here.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never completed: connect failure, DNS, TLS, or a broken
    /// body stream.
    #[error("search request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    #[error("search failed with status {status}")]
    Response { status: u16 },

    /// The body arrived but is not a valid search result array.
    #[error("malformed search response: {message}")]
    Parse { message: String },
}

impl SearchError {
    pub fn transport(source: reqwest::Error) -> Self {
        Self::Transport { source }
    }

    pub fn parse(source: serde_json::Error) -> Self {
        Self::Parse {
            message: source.to_string(),
        }
    }

    /// Stable label for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Response { .. } => "response",
            Self::Parse { .. } => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        let err = SearchError::Response { status: 502 };
        assert_eq!(err.kind(), "response");
        assert_eq!(err.to_string(), "search failed with status 502");

        let err = SearchError::parse(serde_json::from_str::<Vec<i32>>("{}").unwrap_err());
        assert_eq!(err.kind(), "parse");
        assert!(err.to_string().starts_with("malformed search response:"));
    }
}
