//! In-memory fetcher for testing.

use crate::Fetcher;
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
enum Canned {
    Page(String),
    Status(u16),
}

/// In-memory fetcher for testing.
///
/// Serves canned pages keyed by exact URL and counts every request, so tests
/// can assert how often the upstream would have been hit. URLs without a
/// canned response answer with a `404` status error.
///
/// # Examples
///
/// ```
/// use reel_fetch::{Fetcher, MockFetcher};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fetcher = MockFetcher::with_pages([
///     ("https://example.com/home", "<html>...</html>"),
/// ]);
/// assert!(fetcher.fetch("https://example.com/home").await.is_ok());
/// assert!(fetcher.fetch("https://example.com/missing").await.is_err());
/// assert_eq!(fetcher.calls("https://example.com/home").await, 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: RwLock<HashMap<String, Canned>>,
    calls: RwLock<HashMap<String, usize>>,
    referers: RwLock<HashMap<String, Option<String>>>,
}

impl MockFetcher {
    /// Create a mock fetcher pre-populated with pages.
    pub fn with_pages(pages: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let responses = pages.into_iter().map(|(url, html)| (url.into(), Canned::Page(html.into()))).collect();
        Self { responses: RwLock::new(responses), ..Self::default() }
    }

    /// Answer requests for `url` with a non-success status.
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.get_mut().insert(url.into(), Canned::Status(status));
        self
    }

    /// Replace (or add) the page served for `url`.
    pub async fn set_page(&self, url: impl Into<String>, html: impl Into<String>) {
        self.responses.write().await.insert(url.into(), Canned::Page(html.into()));
    }

    /// Number of requests made for `url`.
    pub async fn calls(&self, url: &str) -> usize {
        self.calls.read().await.get(url).copied().unwrap_or(0)
    }

    /// Number of requests made for any URL.
    pub async fn total_calls(&self) -> usize {
        self.calls.read().await.values().sum()
    }

    /// The `Referer` sent with the most recent request for `url`.
    pub async fn last_referer(&self, url: &str) -> Option<String> {
        self.referers.read().await.get(url).cloned().flatten()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_with_referer(&self, url: &str, referer: Option<&str>) -> Result<String> {
        *self.calls.write().await.entry(url.to_string()).or_default() += 1;
        self.referers.write().await.insert(url.to_string(), referer.map(str::to_string));
        match self.responses.read().await.get(url).cloned() {
            Some(Canned::Page(html)) => Ok(html),
            Some(Canned::Status(status)) => exn::bail!(ErrorKind::Status { status, url: url.to_string() }),
            None => exn::bail!(ErrorKind::Status { status: 404, url: url.to_string() }),
        }
    }
}
