//! Outbound page fetching.
//!
//! Every request to the catalog origin goes through a [`Fetcher`]. The
//! production implementation, [`HttpFetcher`], attaches a fixed browser-like
//! [`HeaderProfile`] to each request; the upstream rejects or degrades
//! requests that don't look like they came from a desktop browser.
//!
//! Fetching is fail-fast: no retries, no backoff. Any transport failure or
//! non-success status is returned to the caller immediately.

pub mod error;
mod fetcher;
mod http;
#[cfg(feature = "mock")]
mod mock;
mod profile;

pub use crate::fetcher::Fetcher;
pub use crate::http::HttpFetcher;
#[cfg(feature = "mock")]
pub use crate::mock::MockFetcher;
pub use crate::profile::HeaderProfile;
use std::sync::Arc;

pub type FetcherHandle = Arc<dyn Fetcher + Send + Sync>;
