//! Process-local cache store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::{CacheKey, CacheRecord, CacheStore};

/// In-memory cache store.
///
/// Records live in a `HashMap` behind a [`RwLock`] and are lost when the
/// process exits. Useful for tests and for running without a database file.
///
/// ```
/// use reel_cache::{CacheCategory, CacheKey, CacheRecord, CacheStore, MemoryCache};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cache = MemoryCache::default();
/// let key = CacheKey::new(CacheCategory::Search, "search_dune");
/// cache.put(&CacheRecord::new(key.clone(), serde_json::json!([]), Duration::from_secs(60))).await?;
/// assert!(cache.get(&key).await?.is_some_and(|record| record.is_valid()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryCache {
    records: RwLock<HashMap<CacheKey, CacheRecord>>,
}
impl MemoryCache {
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &CacheKey) -> Result<Option<CacheRecord>> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn put(&self, record: &CacheRecord) -> Result<()> {
        self.records.write().await.insert(record.key.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheCategory;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_miss_then_hit() {
        let cache = MemoryCache::default();
        let key = CacheKey::new(CacheCategory::Movies, "movies_trending");
        assert!(cache.get(&key).await.unwrap().is_none());
        let record = CacheRecord::new(key.clone(), json!([{"title": "Avatar"}]), Duration::from_secs(60));
        cache.put(&record).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = MemoryCache::default();
        let key = CacheKey::new(CacheCategory::Player, "player__movie_avatar-19690");
        cache.put(&CacheRecord::new_at(key.clone(), json!({"old": true}), Duration::from_secs(1), 0)).await.unwrap();
        cache.put(&CacheRecord::new(key.clone(), json!({"new": true}), Duration::from_secs(60))).await.unwrap();
        let stored = cache.get(&key).await.unwrap().unwrap();
        assert_eq!(stored.data, json!({"new": true}));
        assert!(stored.is_valid());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_categories_do_not_collide() {
        let cache = MemoryCache::default();
        let movies = CacheKey::new(CacheCategory::Movies, "x");
        let search = CacheKey::new(CacheCategory::Search, "x");
        cache.put(&CacheRecord::new(movies.clone(), json!(1), Duration::from_secs(60))).await.unwrap();
        assert!(cache.get(&search).await.unwrap().is_none());
        assert!(cache.get(&movies).await.unwrap().is_some());
    }
}
