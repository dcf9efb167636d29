//! Merchant Record Cache Module
//!
//! A time-bounded local cache with transparent fallback to the remote
//! fetch. Reads are best-effort: a broken or stale entry degrades to a
//! network fetch, and a failed persist never fails the call.

mod storage;

pub use storage::{KvStorage, RedbStorage, StorageError, StorageResult};

use crate::client::MerchantFetcher;
use serde::{Deserialize, Serialize};
use shared::error::FetchError;
use shared::menu::MerchantRecord;
use std::sync::Arc;
use std::time::Duration;

/// Cache key prefix
pub const CACHE_PREFIX: &str = "flexorder_cache";

/// Cache format version; bumping it invalidates every previously stored
/// entry without explicit migration
pub const CACHE_VERSION: u32 = 2;

/// One persisted cache entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedRecord {
    /// Epoch milliseconds at store time
    pub stored_at: i64,
    pub payload: MerchantRecord,
}

/// Derived storage key for a merchant
pub fn cache_key(merchant_id: &str) -> String {
    format!("{CACHE_PREFIX}_v{CACHE_VERSION}_{merchant_id}")
}

/// TTL cache of the merchant record over durable storage
pub struct DataCache {
    storage: Arc<dyn KvStorage>,
    ttl: Duration,
}

impl DataCache {
    pub fn new(storage: Arc<dyn KvStorage>, ttl: Duration) -> Self {
        Self { storage, ttl }
    }

    /// Fetch the merchant record, serving from cache while fresh
    ///
    /// A stored entry younger than the TTL is returned without any remote
    /// call; otherwise the remote fetch runs and its result is persisted
    /// best-effort. Fetch failures propagate; persistence failures are
    /// swallowed.
    pub async fn get_or_fetch(
        &self,
        merchant_id: &str,
        fetcher: &dyn MerchantFetcher,
    ) -> Result<MerchantRecord, FetchError> {
        let key = cache_key(merchant_id);

        if let Some(record) = self.read_fresh(&key) {
            tracing::info!(merchant_id, "serving merchant record from local cache");
            return Ok(record);
        }

        tracing::info!(merchant_id, "fetching fresh merchant record");
        let payload = match fetcher.fetch_record(merchant_id).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(merchant_id, error = %e, "merchant fetch failed");
                return Err(e);
            }
        };
        self.persist(&key, &payload);
        Ok(payload)
    }

    /// Stored payload if present, parseable and younger than the TTL
    fn read_fresh(&self, key: &str) -> Option<MerchantRecord> {
        let raw = match self.storage.get(key) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(error = %e, "cache read failed; falling back to remote");
                return None;
            }
        };

        let entry: CachedRecord = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "corrupt cache entry ignored");
                return None;
            }
        };

        if is_fresh(entry.stored_at, now_millis(), self.ttl) {
            Some(entry.payload)
        } else {
            tracing::debug!(stored_at = entry.stored_at, "cache entry expired");
            None
        }
    }

    /// Best-effort persist; failures (e.g. quota) never fail the fetch
    fn persist(&self, key: &str, payload: &MerchantRecord) {
        let entry = CachedRecord {
            stored_at: now_millis(),
            payload: payload.clone(),
        };
        let serialized = match serde_json::to_string(&entry) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "cache entry serialization failed");
                return;
            }
        };
        if let Err(e) = self.storage.set(key, &serialized) {
            tracing::warn!(error = %e, "cache persist failed; continuing without cache");
        }
    }
}

/// Freshness rule: an entry serves reads strictly inside the TTL window
fn is_fresh(stored_at: i64, now: i64, ttl: Duration) -> bool {
    now.saturating_sub(stored_at) < ttl.as_millis() as i64
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MerchantFetcher;
    use async_trait::async_trait;
    use shared::menu::{MenuDocument, MerchantConfig};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TTL_MS: u64 = 900_000;

    struct CountingFetcher {
        calls: AtomicUsize,
        result: Result<Option<MerchantConfig>, FetchError>,
    }

    impl CountingFetcher {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result: Ok(Some(MerchantConfig {
                    owner_email: "dono@example.com".to_string(),
                    ..MerchantConfig::default()
                })),
            }
        }

        fn failing(error: FetchError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result: Err(error),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MerchantFetcher for CountingFetcher {
        async fn fetch_config(
            &self,
            _merchant_id: &str,
        ) -> Result<Option<MerchantConfig>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn fetch_menu(
            &self,
            _merchant_id: &str,
        ) -> Result<Option<MenuDocument>, FetchError> {
            Ok(None)
        }
    }

    fn cache() -> (DataCache, Arc<RedbStorage>) {
        let storage = Arc::new(RedbStorage::open_in_memory().unwrap());
        (
            DataCache::new(storage.clone(), Duration::from_millis(TTL_MS)),
            storage,
        )
    }

    fn seed_entry(storage: &RedbStorage, merchant_id: &str, age_ms: i64) {
        let entry = CachedRecord {
            stored_at: now_millis() - age_ms,
            payload: MerchantRecord::default(),
        };
        storage
            .set(&cache_key(merchant_id), &serde_json::to_string(&entry).unwrap())
            .unwrap();
    }

    #[test]
    fn test_cache_key_carries_version_tag() {
        assert_eq!(cache_key("universo_acai"), "flexorder_cache_v2_universo_acai");
    }

    #[test]
    fn test_freshness_boundary() {
        let ttl = Duration::from_millis(TTL_MS);
        let stored_at = 1_000_000;
        let ttl_ms = TTL_MS as i64;

        assert!(is_fresh(stored_at, stored_at + ttl_ms - 1, ttl));
        assert!(!is_fresh(stored_at, stored_at + ttl_ms + 1, ttl));
        // A clock that moved backwards still serves the entry
        assert!(is_fresh(stored_at, stored_at - 5_000, ttl));
    }

    #[tokio::test]
    async fn test_fresh_entry_skips_remote_fetch() {
        let (cache, storage) = cache();
        seed_entry(&storage, "loja", (TTL_MS as i64) / 2);

        let fetcher = CountingFetcher::ok();
        cache.get_or_fetch("loja", &fetcher).await.unwrap();
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_remote_fetch() {
        let (cache, storage) = cache();
        seed_entry(&storage, "loja", (TTL_MS as i64) + 60_000);

        let fetcher = CountingFetcher::ok();
        let record = cache.get_or_fetch("loja", &fetcher).await.unwrap();
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(record.config.owner_email, "dono@example.com");
    }

    #[tokio::test]
    async fn test_miss_populates_cache_for_next_read() {
        let (cache, _storage) = cache();

        let fetcher = CountingFetcher::ok();
        cache.get_or_fetch("loja", &fetcher).await.unwrap();
        cache.get_or_fetch("loja", &fetcher).await.unwrap();

        // Second call is served locally
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_entry_degrades_to_fetch() {
        let (cache, storage) = cache();
        storage.set(&cache_key("loja"), "not json").unwrap();

        let fetcher = CountingFetcher::ok();
        cache.get_or_fetch("loja", &fetcher).await.unwrap();
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_persist_failure_is_swallowed() {
        struct BrokenStorage;
        impl KvStorage for BrokenStorage {
            fn get(&self, _key: &str) -> StorageResult<Option<String>> {
                Ok(None)
            }
            fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
                Err(StorageError::Storage(redb::StorageError::ValueTooLarge(0)))
            }
            fn remove(&self, _key: &str) -> StorageResult<()> {
                Ok(())
            }
        }

        let cache = DataCache::new(Arc::new(BrokenStorage), Duration::from_millis(TTL_MS));
        let fetcher = CountingFetcher::ok();

        // The fetch result is still returned from the network path
        let record = cache.get_or_fetch("loja", &fetcher).await.unwrap();
        assert_eq!(record.config.owner_email, "dono@example.com");
    }

    #[tokio::test]
    async fn test_fetch_errors_propagate() {
        let (cache, _storage) = cache();

        let denied = CountingFetcher::failing(FetchError::PermissionDenied);
        assert_eq!(
            cache.get_or_fetch("loja", &denied).await.unwrap_err(),
            FetchError::PermissionDenied
        );

        let flaky = CountingFetcher::failing(FetchError::Transient("timeout".to_string()));
        assert_eq!(
            cache.get_or_fetch("loja", &flaky).await.unwrap_err(),
            FetchError::Transient("timeout".to_string())
        );
    }
}
