//! Wiring configuration into a ready-to-use [`Catalog`].

use exn::ResultExt;
use reel_cache::{CacheHandle, Database, MemoryCache, SqliteCache};
use reel_catalog::{Catalog, Ttl};
use reel_config::{CacheBackend, Config};
use reel_fetch::{HeaderProfile, HttpFetcher};
use std::sync::Arc;
use tracing::info;

use crate::error::{ErrorKind, Result};

pub fn header_profile(config: &Config) -> HeaderProfile {
    let upstream = &config.upstream;
    let defaults = HeaderProfile::default();
    HeaderProfile {
        user_agent: upstream.user_agent.clone().unwrap_or(defaults.user_agent),
        accept: upstream.accept.clone().unwrap_or(defaults.accept),
        accept_language: upstream.accept_language.clone().unwrap_or(defaults.accept_language),
    }
}

pub fn ttl(config: &Config) -> Ttl {
    Ttl {
        listing: config.ttl.listing(),
        search: config.ttl.search(),
        player: config.ttl.player(),
        player_fallback: config.ttl.player_fallback(),
    }
}

pub async fn cache(config: &Config) -> Result<CacheHandle> {
    Ok(match config.cache.backend {
        CacheBackend::Memory => Arc::new(MemoryCache::default()),
        CacheBackend::Sqlite => {
            let path = config.cache.database_path().or_raise(|| ErrorKind::Cache)?;
            info!(path = %path.display(), "opening cache database");
            let db = Database::connect(&path).await.or_raise(|| ErrorKind::Cache)?;
            Arc::new(SqliteCache::from(&db))
        },
    })
}

pub async fn catalog(config: &Config) -> Result<Catalog> {
    let fetcher = HttpFetcher::new(header_profile(config), config.upstream.timeout()).or_raise(|| ErrorKind::Client)?;
    let cache = cache(config).await?;
    Ok(Catalog::new(Arc::new(fetcher), cache, config.upstream.origin.as_str()).with_ttl(ttl(config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_header_profile_overrides() {
        let mut config = Config::default();
        config.upstream.user_agent = Some("reel-test/1.0".to_string());
        let profile = header_profile(&config);
        assert_eq!(profile.user_agent, "reel-test/1.0");
        assert_eq!(profile.accept, HeaderProfile::default().accept);
    }

    #[test]
    fn test_ttl_from_config() {
        let mut config = Config::default();
        config.ttl.search_minutes = 5;
        let ttl = ttl(&config);
        assert_eq!(ttl.search, Duration::from_secs(300));
        assert_eq!(ttl.listing, Ttl::default().listing);
        assert_eq!(ttl.player_fallback, Ttl::default().player_fallback);
    }

    #[tokio::test]
    async fn test_memory_backend() {
        let mut config = Config::default();
        config.cache.backend = CacheBackend::Memory;
        assert_eq!(cache(&config).await.unwrap().name(), "memory");
    }
}
