use crate::error::{Error, ErrorKind};
use crate::{CacheKey, CacheRecord};
use exn::ResultExt;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct RecordRow {
    pub(crate) category: String,
    pub(crate) key: String,
    pub(crate) data: String,
    pub(crate) timestamp: i64,
    pub(crate) expires_at: i64,
}
impl TryFrom<&CacheRecord> for RecordRow {
    type Error = Error;
    fn try_from(record: &CacheRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            category: record.key.category().as_str().to_string(),
            key: record.key.key().to_string(),
            data: serde_json::to_string(&record.data).or_raise(|| ErrorKind::Serialization)?,
            timestamp: record.timestamp,
            expires_at: record.expires_at,
        })
    }
}
impl TryFrom<RecordRow> for CacheRecord {
    type Error = Error;
    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        Ok(Self {
            key: CacheKey::new(row.category.parse()?, row.key),
            data: serde_json::from_str(&row.data).or_raise(|| ErrorKind::InvalidData("data"))?,
            timestamp: row.timestamp,
            expires_at: row.expires_at,
        })
    }
}
