//! In-memory query cache
//!
//! Entries are keyed by a hierarchical [`QueryKey`] and hold any cloneable
//! value. Freshness is decided by the caller's stale time at read time;
//! invalidation marks entries stale (the value stays around so a view can
//! keep showing it while a refetch is in flight).

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Hierarchical cache key, e.g. `["points", "me"]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryKey(parts.into_iter().map(Into::into).collect())
    }

    /// Whether `self` equals `prefix` or lies below it
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0.iter().zip(&prefix.0).all(|(a, b)| a == b)
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Cached item with its last update time
struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    updated_at: Instant,
    invalidated: bool,
}

impl CacheEntry {
    fn is_stale(&self, stale_time: Duration) -> bool {
        self.invalidated || self.updated_at.elapsed() > stale_time
    }
}

/// A cached value and whether it is still fresh
#[derive(Debug, Clone, PartialEq)]
pub enum Cached<T> {
    Fresh(T),
    Stale(T),
}

impl<T> Cached<T> {
    pub fn into_inner(self) -> T {
        match self {
            Cached::Fresh(v) | Cached::Stale(v) => v,
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, Cached::Fresh(_))
    }
}

/// Thread-safe cache for query results
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
    invalidations: RwLock<HashMap<QueryKey, u32>>,
    max_entries: usize,
}

impl QueryCache {
    /// Create a cache holding at most `max_entries` keys
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            invalidations: RwLock::new(HashMap::new()),
            max_entries,
        }
    }

    /// Look up a value, judging freshness against `stale_time`.
    /// Returns `None` when absent or stored with a different type.
    pub fn get<T>(&self, key: &QueryKey, stale_time: Duration) -> Option<Cached<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key)?;
        let value = entry.value.downcast_ref::<T>()?.clone();

        if entry.is_stale(stale_time) {
            Some(Cached::Stale(value))
        } else {
            Some(Cached::Fresh(value))
        }
    }

    /// Insert or replace a value; the entry becomes fresh.
    /// Evicts the oldest entry when at capacity.
    pub fn insert<T>(&self, key: QueryKey, value: T)
    where
        T: Send + Sync + 'static,
    {
        if let Ok(mut entries) = self.entries.write() {
            if !entries.contains_key(&key) && entries.len() >= self.max_entries {
                if let Some(oldest_key) = entries
                    .iter()
                    .min_by_key(|(_, e)| e.updated_at)
                    .map(|(k, _)| k.clone())
                {
                    entries.remove(&oldest_key);
                }
            }

            entries.insert(
                key,
                CacheEntry {
                    value: Arc::new(value),
                    updated_at: Instant::now(),
                    invalidated: false,
                },
            );
        }
    }

    /// Mark every entry at or below `prefix` stale.
    ///
    /// Each call is counted against `prefix` whether or not anything was
    /// cached yet. Returns the number of entries marked.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        if let Ok(mut counts) = self.invalidations.write() {
            *counts.entry(prefix.clone()).or_insert(0) += 1;
        }

        let Ok(mut entries) = self.entries.write() else {
            return 0;
        };
        let mut marked = 0;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                marked += 1;
            }
        }
        marked
    }

    /// How many times `key` has been passed to [`invalidate`](Self::invalidate)
    pub fn invalidation_count(&self, key: &QueryKey) -> u32 {
        self.invalidations
            .read()
            .ok()
            .and_then(|counts| counts.get(key).copied())
            .unwrap_or(0)
    }

    /// Clear entire cache (e.g. on logout)
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.entries.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::with_capacity(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn test_prefix_matching() {
        let orders = QueryKey::new(["orders", "me", "u1"]);
        assert!(orders.starts_with(&QueryKey::new(["orders"])));
        assert!(orders.starts_with(&orders));
        assert!(!orders.starts_with(&QueryKey::new(["orders", "me", "u2"])));
        assert!(!QueryKey::new(["orders"]).starts_with(&orders));
    }

    #[test]
    fn test_fresh_then_stale_after_invalidate() {
        let cache = QueryCache::default();
        let key = QueryKey::new(["points", "me"]);
        cache.insert(key.clone(), 1500u64);

        assert_eq!(cache.get::<u64>(&key, MINUTE), Some(Cached::Fresh(1500)));

        assert_eq!(cache.invalidate(&QueryKey::new(["points"])), 1);
        assert_eq!(cache.get::<u64>(&key, MINUTE), Some(Cached::Stale(1500)));

        cache.insert(key.clone(), 1600u64);
        assert_eq!(cache.get::<u64>(&key, MINUTE), Some(Cached::Fresh(1600)));
    }

    #[test]
    fn test_zero_stale_time_is_always_stale() {
        let cache = QueryCache::default();
        let key = QueryKey::new(["products"]);
        cache.insert(key.clone(), vec!["coffee".to_string()]);
        std::thread::sleep(Duration::from_millis(2));
        assert!(!cache.get::<Vec<String>>(&key, Duration::ZERO).unwrap().is_fresh());
    }

    #[test]
    fn test_type_mismatch_is_a_miss() {
        let cache = QueryCache::default();
        let key = QueryKey::new(["products"]);
        cache.insert(key.clone(), 3u32);
        assert!(cache.get::<String>(&key, MINUTE).is_none());
    }

    #[test]
    fn test_invalidation_counted_even_when_empty() {
        let cache = QueryCache::default();
        let key = QueryKey::new(["points", "me"]);
        assert_eq!(cache.invalidate(&key), 0);
        assert_eq!(cache.invalidation_count(&key), 1);
        assert_eq!(cache.invalidation_count(&QueryKey::new(["products"])), 0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let cache = QueryCache::with_capacity(2);
        cache.insert(QueryKey::new(["a"]), 1u8);
        std::thread::sleep(Duration::from_millis(2));
        cache.insert(QueryKey::new(["b"]), 2u8);
        cache.insert(QueryKey::new(["c"]), 3u8);
        assert_eq!(cache.len(), 2);
        assert!(cache.get::<u8>(&QueryKey::new(["a"]), MINUTE).is_none());
    }

    #[test]
    fn test_clear() {
        let cache = QueryCache::default();
        cache.insert(QueryKey::new(["orders", "me", "u1"]), 1u8);
        cache.insert(QueryKey::new(["products"]), 2u8);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
