//! Catalog Error Types
//!
//! Only an upstream fetch of the requested resource can fail a catalog
//! operation. Extraction yields empty data rather than errors, and cache
//! failures are logged and swallowed.

use derive_more::{Display, Error};
use reel_fetch::error::{Error as FetchError, ErrorKind as FetchErrorKind};

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The upstream page for the requested resource could not be fetched.
    #[display("{_0}")]
    Fetch(FetchErrorKind),
}
impl ErrorKind {
    /// Convert a fetch error into a catalog error, preserving the fetch
    /// crate's `Exn` frame (error tree) as a child in its own error tree.
    #[track_caller]
    pub fn fetch(err: FetchError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Fetch(inner))
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Fetch(inner) => inner.is_retryable(),
        }
    }
}
