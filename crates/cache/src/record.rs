use serde_json::Value;
use std::time::Duration;
use time::UtcDateTime;

use crate::CacheKey;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    i64::try_from(UtcDateTime::now().unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

/// A cached payload together with its creation and expiry times (both in
/// milliseconds since the Unix epoch).
#[derive(Debug, Clone, PartialEq)]
pub struct CacheRecord {
    pub key: CacheKey,
    pub data: Value,
    pub timestamp: i64,
    pub expires_at: i64,
}
impl CacheRecord {
    /// A record created now that expires after `ttl`.
    pub fn new(key: CacheKey, data: Value, ttl: Duration) -> Self {
        Self::new_at(key, data, ttl, now_millis())
    }

    pub fn new_at(key: CacheKey, data: Value, ttl: Duration, now: i64) -> Self {
        let ttl = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        Self {
            key,
            data,
            timestamp: now,
            expires_at: now.saturating_add(ttl),
        }
    }

    /// Valid iff `now` is strictly before the expiry time.
    pub fn is_valid_at(&self, now: i64) -> bool {
        now < self.expires_at
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(now_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheCategory;
    use serde_json::json;

    fn record(ttl: Duration, now: i64) -> CacheRecord {
        CacheRecord::new_at(CacheKey::new(CacheCategory::Search, "search_dune"), json!([]), ttl, now)
    }

    #[test]
    fn test_expiry_boundary() {
        let record = record(Duration::from_secs(60), 1_000);
        assert_eq!(record.expires_at, 61_000);
        assert!(record.is_valid_at(1_000));
        assert!(record.is_valid_at(60_999));
        assert!(!record.is_valid_at(61_000));
        assert!(!record.is_valid_at(90_000));
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let record = record(Duration::MAX, 1_000);
        assert_eq!(record.expires_at, i64::MAX);
        assert!(record.is_valid());
    }

    #[test]
    fn test_now_is_plausible() {
        // 2020-01-01T00:00:00Z
        assert!(now_millis() > 1_577_836_800_000);
    }
}
