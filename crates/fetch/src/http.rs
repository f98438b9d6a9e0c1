//! reqwest-backed fetcher.

use crate::error::{ErrorKind, Result};
use crate::{Fetcher, HeaderProfile};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::REFERER;
use std::time::Duration;
use tracing::instrument;

/// Default upper bound for a single upstream request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Production [`Fetcher`] built on a shared [`reqwest::Client`].
///
/// The client is cheap to clone and pools connections internally, so one
/// instance is meant to live for the whole process.
///
/// # Examples
///
/// ```no_run
/// use reel_fetch::{Fetcher, HeaderProfile, HttpFetcher};
/// use std::time::Duration;
///
/// # async fn example() -> reel_fetch::error::Result<()> {
/// let fetcher = HttpFetcher::new(HeaderProfile::default(), Duration::from_secs(10))?;
/// let html = fetcher.fetch("https://himovies.sx/home").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}
impl HttpFetcher {
    pub fn new(profile: HeaderProfile, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .default_headers(profile.header_map()?)
            .timeout(timeout)
            .build()
            .map_err(|e| ErrorKind::Client(e.to_string()))?;
        Ok(Self { client })
    }

    fn transport(url: &str, e: reqwest::Error) -> ErrorKind {
        ErrorKind::Transport { url: url.to_string(), reason: e.to_string() }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    #[instrument(skip(self), fields(status))]
    async fn fetch_with_referer(&self, url: &str, referer: Option<&str>) -> Result<String> {
        let mut request = self.client.get(url);
        if let Some(referer) = referer {
            request = request.header(REFERER, referer);
        }
        let response = request.send().await.map_err(|e| Self::transport(url, e))?;
        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());
        if !status.is_success() {
            exn::bail!(ErrorKind::Status { status: status.as_u16(), url: url.to_string() });
        }
        let body = response
            .text()
            .await
            .map_err(|e| ErrorKind::Body { url: url.to_string(), reason: e.to_string() })?;
        tracing::debug!(bytes = body.len(), "fetched upstream page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_default_profile() {
        assert!(HttpFetcher::new(HeaderProfile::default(), DEFAULT_TIMEOUT).is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_profile() {
        let profile = HeaderProfile { accept: "\0".to_string(), ..HeaderProfile::default() };
        assert!(HttpFetcher::new(profile, DEFAULT_TIMEOUT).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let fetcher = HttpFetcher::new(HeaderProfile::default(), Duration::from_millis(500)).unwrap();
        // Port 9 (discard) on loopback is closed on any sane test machine.
        let err = fetcher.fetch("http://127.0.0.1:9/home").await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Transport { .. }));
        assert!(err.is_retryable());
    }
}
