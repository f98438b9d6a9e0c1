use crate::error::{ErrorKind, Result};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// The fixed set of headers sent with every upstream request.
///
/// This is part of the fetch contract, not decoration: the catalog origin
/// answers header-less clients with challenge pages or errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderProfile {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}
impl Default for HeaderProfile {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}
impl HeaderProfile {
    /// Convert the profile into a header map suitable for
    /// [`ClientBuilder::default_headers`](reqwest::ClientBuilder::default_headers).
    pub fn header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, Self::value("user-agent", &self.user_agent)?);
        headers.insert(ACCEPT, Self::value("accept", &self.accept)?);
        headers.insert(ACCEPT_LANGUAGE, Self::value("accept-language", &self.accept_language)?);
        Ok(headers)
    }

    fn value(name: &str, value: &str) -> Result<HeaderValue> {
        Ok(HeaderValue::from_str(value).map_err(|e| ErrorKind::Client(format!("invalid {name} header: {e}")))?)
    }
}
