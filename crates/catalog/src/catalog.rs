use reel_cache::{CacheHandle, CacheKey, CacheRecord};
use reel_extract::models::{CatalogEntry, PlayerResolution, Section};
use reel_extract::{ListingExtractor, PageExtractor, SearchExtractor};
use reel_fetch::FetcherHandle;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::error::{ErrorKind, Result};
use crate::{Ttl, keys};

/// Every home-page section, fetched concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllSections {
    pub trending: Vec<CatalogEntry>,
    pub latest_movies: Vec<CatalogEntry>,
    pub latest_tv: Vec<CatalogEntry>,
}

/// The pipeline's public surface: listings, search and player resolution,
/// each behind a cache-aside lookup.
///
/// Each operation checks the cache first and returns a fresh record without
/// touching the network. Otherwise it fetches and extracts, stores the result
/// and returns it. Only successful results are ever cached, and a failing
/// cache store never fails an operation.
pub struct Catalog {
    fetcher: FetcherHandle,
    cache: CacheHandle,
    origin: String,
    ttl: Ttl,
}
impl Catalog {
    pub fn new(fetcher: FetcherHandle, cache: CacheHandle, origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self {
            fetcher,
            cache,
            origin,
            ttl: Ttl::default(),
        }
    }

    pub fn with_ttl(mut self, ttl: Ttl) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Up to twenty entries of one home-page section.
    #[instrument(skip(self))]
    pub async fn list_category(&self, section: Section) -> Result<Vec<CatalogEntry>> {
        let extractor = ListingExtractor::new(self.origin.as_str(), section);
        let url = format!("{}/home", self.origin);
        let produce = async { self.fetch(&url, None).await.map(|html| extractor.extract(&html)) };
        self.cached(keys::listing(section), |_| self.ttl.listing, produce).await
    }

    /// All sections at once. A section that fails comes back empty without
    /// affecting the others.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> AllSections {
        let (trending, latest_movies, latest_tv) = tokio::join!(
            self.list_or_empty(Section::Trending),
            self.list_or_empty(Section::LatestMovies),
            self.list_or_empty(Section::LatestTv),
        );
        AllSections {
            trending,
            latest_movies,
            latest_tv,
        }
    }

    async fn list_or_empty(&self, section: Section) -> Vec<CatalogEntry> {
        self.list_category(section).await.unwrap_or_else(|err| {
            warn!(%section, error = %*err, "section unavailable, substituting an empty list");
            Vec::new()
        })
    }

    /// Every result the catalog's search page lists for `query`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        let extractor = SearchExtractor::new(self.origin.as_str());
        let url = format!("{}/search/{}", self.origin, urlencoding::encode(query));
        let produce = async { self.fetch(&url, None).await.map(|html| extractor.extract(&html)) };
        self.cached(keys::search(query), |_| self.ttl.search, produce).await
    }

    /// Resolve a catalog reference path to something playable.
    ///
    /// A watch page without any recognisable player still succeeds, as a
    /// fallback to the watch page itself, and is cached for a shorter time.
    #[instrument(skip(self))]
    pub async fn resolve_player(&self, href: &str) -> Result<PlayerResolution> {
        let url = reel_extract::watch_url(href, &self.origin);
        let produce = async {
            let html = self.fetch(&url, Some(&self.origin)).await;
            html.map(|html| reel_extract::resolve_player(&html, &self.origin, href))
        };
        self.cached(keys::player(href), |resolution| self.ttl.for_resolution(resolution), produce).await
    }

    async fn fetch(&self, url: &str, referer: Option<&str>) -> Result<String> {
        self.fetcher.fetch_with_referer(url, referer).await.map_err(|err| {
            error!(url, error = %*err, "upstream fetch failed");
            ErrorKind::fetch(err)
        })
    }

    /// Cache-aside around `produce`: a fresh cached value short-circuits it,
    /// a successful result is stored for `ttl(&value)`.
    async fn cached<T, F>(&self, key: CacheKey, ttl: F, produce: impl Future<Output = Result<T>>) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&T) -> Duration,
    {
        if let Some(value) = self.lookup(&key).await {
            return Ok(value);
        }
        let value = produce.await?;
        self.store(key, &value, ttl(&value)).await;
        Ok(value)
    }

    async fn lookup<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let record = match self.cache.get(key).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(%key, "cache miss");
                return None;
            },
            Err(err) => {
                warn!(%key, store = self.cache.name(), error = %*err, "cache read failed, treating as a miss");
                return None;
            },
        };
        if !record.is_valid() {
            debug!(%key, expires_at = record.expires_at, "cache expired");
            return None;
        }
        match serde_json::from_value(record.data) {
            Ok(value) => {
                debug!(%key, "cache hit");
                Some(value)
            },
            Err(err) => {
                warn!(%key, error = %err, "undecodable cache record, treating as a miss");
                None
            },
        }
    }

    async fn store<T: Serialize>(&self, key: CacheKey, value: &T, ttl: Duration) {
        let data = match serde_json::to_value(value) {
            Ok(data) => data,
            Err(err) => {
                warn!(%key, error = %err, "could not encode result for caching");
                return;
            },
        };
        let record = CacheRecord::new(key, data, ttl);
        if let Err(err) = self.cache.put(&record).await {
            warn!(key = %record.key, store = self.cache.name(), error = %*err, "cache write failed");
        }
    }
}
