//! The cache access contract.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::{CacheKey, CacheRecord};

pub type CacheHandle = Arc<dyn CacheStore + Send + Sync>;

/// A key/value store of [`CacheRecord`]s.
///
/// Stores do not interpret expiry: [`get()`](Self::get) returns whatever
/// record is stored, expired or not, and the caller decides whether it is
/// still usable. [`put()`](Self::put) always overwrites.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Name of the store implementation, for logging only.
    fn name(&self) -> &str;

    /// Fetch the record stored under `key`, if any.
    async fn get(&self, key: &CacheKey) -> Result<Option<CacheRecord>>;

    /// Store `record` under its key, replacing any previous record.
    async fn put(&self, record: &CacheRecord) -> Result<()>;
}
