//! SQLite-backed cache store.

use async_trait::async_trait;
use exn::ResultExt;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::Database;
use crate::error::{ErrorKind, Result};
use crate::models::RecordRow;
use crate::{CacheKey, CacheRecord, CacheStore};

/// Cache store persisting records to a [`Database`].
///
/// Records survive restarts; expired records are left in place until the
/// next write for the same key overwrites them.
#[derive(Debug, Clone)]
pub struct SqliteCache {
    pool: SqlitePool,
}
impl From<&Database> for SqliteCache {
    fn from(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }
}
impl SqliteCache {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of stored records, expired or not.
    pub async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(include_str!("../queries/count_records.sql"))
            .fetch_one(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        u64::try_from(count).or_raise(|| ErrorKind::InvalidData("count"))
    }
}

#[async_trait]
impl CacheStore for SqliteCache {
    fn name(&self) -> &str {
        "sqlite"
    }

    #[instrument(level = "trace", skip_all, fields(key = %key))]
    async fn get(&self, key: &CacheKey) -> Result<Option<CacheRecord>> {
        let row: Option<RecordRow> = sqlx::query_as(include_str!("../queries/get_record.sql"))
            .bind(key.category().as_str())
            .bind(key.key())
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        row.map(CacheRecord::try_from).transpose()
    }

    #[instrument(level = "trace", skip_all, fields(key = %record.key))]
    async fn put(&self, record: &CacheRecord) -> Result<()> {
        let row = RecordRow::try_from(record)?;
        sqlx::query(include_str!("../queries/upsert_record.sql"))
            .bind(&row.category)
            .bind(&row.key)
            .bind(&row.data)
            .bind(row.timestamp)
            .bind(row.expires_at)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(())
    }
}
