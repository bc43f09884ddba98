//! Query client: stale-time cache with in-flight de-duplication

use super::{points_me_key, products_key, roulette_status_key};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, instrument};
use voltup_core::{PointsSummary, Product, Result, RouletteStatus};
use voltup_networking::RewardsApi;
use voltup_persistence::{Cached, QueryCache, QueryKey};

/// Data younger than this is served without a refetch
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(60);

pub struct QueryClient {
    cache: QueryCache,
    /// One async lock per key so identical concurrent reads share a fetch
    in_flight: Mutex<HashMap<QueryKey, Arc<tokio::sync::Mutex<()>>>>,
    stale_time: Duration,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::with_stale_time(DEFAULT_STALE_TIME)
    }

    pub fn with_stale_time(stale_time: Duration) -> Self {
        Self {
            cache: QueryCache::default(),
            in_flight: Mutex::new(HashMap::new()),
            stale_time,
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    fn key_lock(&self, key: &QueryKey) -> Arc<tokio::sync::Mutex<()>> {
        match self.in_flight.lock() {
            Ok(mut locks) => locks.entry(key.clone()).or_default().clone(),
            // poisoned: fall back to an unshared lock
            Err(_) => Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Return the cached value while fresh, otherwise run `fetcher` and
    /// cache its result. Concurrent callers for the same key wait for the
    /// first fetch instead of issuing their own. Failures are not cached.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(Cached::Fresh(value)) = self.cache.get::<T>(&key, self.stale_time) {
            return Ok(value);
        }

        let lock = self.key_lock(&key);
        let _guard = lock.lock().await;

        // someone else may have filled it while we waited
        if let Some(Cached::Fresh(value)) = self.cache.get::<T>(&key, self.stale_time) {
            return Ok(value);
        }

        debug!("Fetching {}", key);
        let value = fetcher().await?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    /// Last known value regardless of freshness (shown while refetching)
    pub fn peek<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.cache.get::<T>(key, self.stale_time).map(Cached::into_inner)
    }

    /// Mark `key` and everything below it stale
    pub fn invalidate(&self, key: &QueryKey) {
        let marked = self.cache.invalidate(key);
        debug!("Invalidated {} ({} entries)", key, marked);
    }

    /// Drop everything (logout)
    pub fn clear(&self) {
        self.cache.clear();
    }

    // ─── Typed queries ──────────────────────────────────────────────

    #[instrument(skip_all)]
    pub async fn points_me(&self, api: &dyn RewardsApi) -> Result<PointsSummary> {
        self.fetch(points_me_key(), || api.fetch_points_me()).await
    }

    #[instrument(skip_all)]
    pub async fn products(&self, api: &dyn RewardsApi) -> Result<Vec<Product>> {
        self.fetch(products_key(), || api.fetch_products()).await
    }

    /// Daily status; a single attempt, no retry
    #[instrument(skip_all)]
    pub async fn roulette_status(&self, api: &dyn RewardsApi) -> Result<RouletteStatus> {
        self.fetch(roulette_status_key(), || api.fetch_roulette_status()).await
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use voltup_core::{Error, Points};

    #[tokio::test]
    async fn test_fresh_value_served_from_cache() {
        let client = QueryClient::new();
        let calls = AtomicU32::new(0);

        for _ in 0..3 {
            let value = client
                .fetch(points_me_key(), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(Points(1500))
                })
                .await
                .unwrap();
            assert_eq!(value, Points(1500));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let client = QueryClient::new();
        client.fetch(products_key(), || async { Ok(1u32) }).await.unwrap();
        client.invalidate(&products_key());

        let value = client.fetch(products_key(), || async { Ok(2u32) }).await.unwrap();
        assert_eq!(value, 2);
        assert_eq!(client.cache().invalidation_count(&products_key()), 1);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let client = QueryClient::new();
        let err = client
            .fetch::<u32, _, _>(roulette_status_key(), || async {
                Err(Error::NetworkError("offline".into()))
            })
            .await;
        assert!(err.is_err());
        assert!(client.peek::<u32>(&roulette_status_key()).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_reads_share_one_fetch() {
        let client = Arc::new(QueryClient::new());
        let calls = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let client = client.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                client
                    .fetch(products_key(), || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(100)).await;
                        Ok(vec!["coffee".to_string()])
                    })
                    .await
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), vec!["coffee".to_string()]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_clear_drops_cached_data() {
        let client = QueryClient::new();
        client.fetch(points_me_key(), || async { Ok(Points(10)) }).await.unwrap();
        client.clear();
        assert!(client.peek::<Points>(&points_me_key()).is_none());
    }
}
