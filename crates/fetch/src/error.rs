//! Fetch Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A fetch error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The HTTP client could not be constructed (bad header value, TLS setup).
    #[display("could not build HTTP client: {_0}")]
    Client(#[error(not(source))] String),
    /// Connection, DNS, TLS or timeout failure before a response arrived.
    #[display("request to {url} failed: {reason}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// Message reported by the HTTP client.
        reason: String,
    },
    /// The upstream answered, but not with a success status.
    #[display("upstream responded with status {status} for {url}")]
    Status {
        /// HTTP status code returned by the upstream.
        status: u16,
        /// The URL that was requested.
        url: String,
    },
    /// The response body could not be read or decoded as text.
    #[display("could not read response body from {url}: {reason}")]
    Body {
        /// The URL that was requested.
        url: String,
        /// Message reported by the HTTP client.
        reason: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    ///
    /// Nothing in this workspace retries; this only informs callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Body { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Client(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(403, false)]
    #[case(404, false)]
    #[case(429, true)]
    #[case(502, true)]
    fn test_status_retryable(#[case] status: u16, #[case] expected: bool) {
        let kind = ErrorKind::Status { status, url: "https://example.com".to_string() };
        assert_eq!(kind.is_retryable(), expected);
    }

    #[test]
    fn test_display_mentions_status_and_url() {
        let kind = ErrorKind::Status { status: 403, url: "https://example.com/home".to_string() };
        assert_eq!(kind.to_string(), "upstream responded with status 403 for https://example.com/home");
    }

    #[test]
    fn test_body_error_keeps_client_message() {
        let kind = ErrorKind::Body {
            url: "https://example.com/home".to_string(),
            reason: "error decoding response body".to_string(),
        };
        assert!(kind.is_retryable());
        assert_eq!(
            kind.to_string(),
            "could not read response body from https://example.com/home: error decoding response body"
        );
    }
}
