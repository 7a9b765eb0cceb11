//! Error types for the search client

use thiserror::Error;

/// Failure raised by search client operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// The backend could not be reached, or the request timed out
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("search backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    /// The response body was not a valid result list
    #[error("could not decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Classification stored in controller state and matched by the view
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Transport(_) => ErrorKind::Transport,
            SearchError::Backend { status, .. } => ErrorKind::Backend(*status),
            SearchError::Decode(_) => ErrorKind::Decode,
        }
    }
}

/// Lightweight classification of a [`SearchError`].
///
/// The view layer renders distinct messaging per kind, so "no matches" is
/// never conflated with "service unreachable" or "malformed response".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network-level failure
    Transport,
    /// Non-success HTTP status from the backend
    Backend(u16),
    /// Response body did not decode
    Decode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_carries_diagnostics() {
        let err = SearchError::Backend {
            status: 503,
            body: "embedding model warming up".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Backend(503));
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("embedding model warming up"));
    }

    #[test]
    fn test_decode_kind() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = SearchError::from(json_err);
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
