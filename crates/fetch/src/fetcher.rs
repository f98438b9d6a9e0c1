use crate::error::Result;
use async_trait::async_trait;

/// Single point of upstream I/O.
///
/// Implementations return the raw response body as text, or an error for any
/// transport failure or non-success status. They must not retry.
///
/// # Examples
///
/// ```no_run
/// use reel_fetch::{Fetcher, error::Result};
///
/// async fn home_page(fetcher: &dyn Fetcher) -> Result<usize> {
///     let html = fetcher.fetch("https://himovies.sx/home").await?;
///     Ok(html.len())
/// }
/// ```
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a page without a `Referer` header.
    async fn fetch(&self, url: &str) -> Result<String> {
        self.fetch_with_referer(url, None).await
    }

    /// Fetch a page, optionally presenting a `Referer` header on top of the
    /// implementation's fixed header profile.
    async fn fetch_with_referer(&self, url: &str, referer: Option<&str>) -> Result<String>;
}
