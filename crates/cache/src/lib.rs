//! TTL key/value cache for catalog responses.
//!
//! Records are addressed by a [`CacheKey`] (`cache/{category}/{key}`) and
//! carry their own creation and expiry times. Stores never evict: expiry is
//! checked lazily by the reader, and an expired record is simply overwritten
//! by the next successful write.
//!
//! Two [`CacheStore`] implementations are provided:
//! - [`SqliteCache`]: persistent, backed by a [`Database`] pool.
//! - [`MemoryCache`]: process-local, for tests and throwaway runs.

mod db;
pub mod error;
mod key;
mod memory;
mod models;
mod record;
mod sqlite;
mod store;

pub use crate::db::Database;
pub use crate::key::{CacheCategory, CacheKey};
pub use crate::memory::MemoryCache;
pub use crate::record::{CacheRecord, now_millis};
pub use crate::sqlite::SqliteCache;
pub use crate::store::{CacheHandle, CacheStore};
