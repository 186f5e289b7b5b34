//! Shared Cache Module
//!
//! Process-wide recency cache handed to request handlers through
//! `AppState`. One mutex serialises every operation; the lock is held for
//! a single call and never across I/O.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CachedPayload, RecencyCache, Timestamped};
use crate::error::CacheError;

/// Value type stored under every key.
pub type CacheValue = Timestamped<CachedPayload>;

#[derive(Debug)]
struct Inner {
    entries: RecencyCache<String, CacheValue>,
    stats: CacheStats,
}

// == Shared Cache ==
/// Cloneable handle to one mutex-guarded [`RecencyCache`].
///
/// `get` promotes and is the observation primitive services use: it reads
/// and clones under one lock, so there is no window between a membership
/// check and the read. `has` is a non-mutating probe kept for diagnostics.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<Inner>>,
}

impl SharedCache {
    // == Constructor ==
    /// Fails fast on a zero capacity.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        let entries = RecencyCache::new(capacity)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                entries,
                stats: CacheStats::with_capacity(capacity),
            })),
        })
    }

    // == Get ==
    /// Returns a clone of the value and marks the key most recently used.
    pub async fn get(&self, key: &str) -> Option<CacheValue> {
        let mut inner = self.inner.lock().await;
        let found = inner.entries.get(key).cloned();
        match found {
            Some(value) => {
                inner.stats.record_hit();
                debug!(key, "cache hit");
                Some(value)
            }
            None => {
                inner.stats.record_miss();
                debug!(key, "cache miss");
                None
            }
        }
    }

    // == Set ==
    /// Inserts or overwrites; evicts the coldest entry when full.
    pub async fn set(&self, key: impl Into<String>, value: CacheValue) {
        let mut inner = self.inner.lock().await;
        if let Some((evicted, _)) = inner.entries.set(key.into(), value) {
            inner.stats.record_eviction();
            debug!(key = %evicted, "cache eviction");
        }
    }

    /// Membership probe; no recency or stats side effects.
    pub async fn has(&self, key: &str) -> bool {
        self.inner.lock().await.entries.has(key)
    }

    /// Reclassifies the caller's last hit as a stale miss.
    pub async fn record_stale(&self) {
        self.inner.lock().await.stats.record_stale();
    }

    /// Removes every entry. Returns how many were dropped.
    pub async fn clear(&self) -> usize {
        let mut inner = self.inner.lock().await;
        let removed = inner.entries.len();
        inner.entries.clear();
        removed
    }

    /// Number of entries currently held.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    /// True when no entries are held.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Alias of [`len`](Self::len).
    pub async fn size(&self) -> usize {
        self.len().await
    }

    /// Counter snapshot with current occupancy.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.lock().await;
        let mut stats = inner.stats.clone();
        stats.entries = inner.entries.len();
        stats
    }

    /// Keys from most to least recently used.
    pub async fn keys(&self) -> Vec<String> {
        let inner = self.inner.lock().await;
        inner.entries.iter().map(|(k, _)| k.clone()).collect()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Place;

    fn place(name: &str) -> CacheValue {
        Timestamped::new(
            CachedPayload::Place(Place {
                name: name.to_string(),
                lat: 0.0,
                lon: 0.0,
                country: None,
            }),
            0,
        )
    }

    #[tokio::test]
    async fn test_zero_capacity_fails() {
        assert!(matches!(
            SharedCache::new(0),
            Err(CacheError::InvalidCapacity(0))
        ));
    }

    #[tokio::test]
    async fn test_get_records_hits_and_misses() {
        let cache = SharedCache::new(4).unwrap();
        cache.set("geo_paris", place("Paris")).await;

        assert!(cache.get("geo_paris").await.is_some());
        assert!(cache.get("geo_rome").await.is_none());

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.capacity, 4);
    }

    #[tokio::test]
    async fn test_has_leaves_stats_and_order_alone() {
        let cache = SharedCache::new(2).unwrap();
        cache.set("a", place("a")).await;
        cache.set("b", place("b")).await;

        assert!(cache.has("a").await);
        cache.set("c", place("c")).await;

        assert!(!cache.has("a").await);
        let stats = cache.stats().await;
        assert_eq!(stats.hits + stats.misses, 0);
        assert_eq!(stats.evictions, 1);
    }

    #[tokio::test]
    async fn test_clear_reports_removed() {
        let cache = SharedCache::new(3).unwrap();
        cache.set("a", place("a")).await;
        cache.set("b", place("b")).await;

        assert_eq!(cache.clear().await, 2);
        assert!(cache.is_empty().await);
        assert!(cache.get("a").await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = SharedCache::new(3).unwrap();
        let handle = cache.clone();
        handle.set("a", place("a")).await;
        assert_eq!(cache.size().await, 1);
        assert_eq!(cache.keys().await, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_concurrent_writers_respect_capacity() {
        let cache = SharedCache::new(8).unwrap();
        let mut handles = Vec::new();

        for i in 0..64 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                cache.set(format!("k{}", i % 16), place("x")).await;
                cache.get(&format!("k{}", (i + 3) % 16)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 8);
        assert_eq!(stats.hits + stats.misses, 64);
    }
}
