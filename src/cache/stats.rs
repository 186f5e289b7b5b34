//! Cache Statistics Module
//!
//! Counters for the shared cache: hits, misses, stale hits and evictions.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups that served a usable value
    pub hits: u64,
    /// Lookups for absent keys, plus stale entries that forced a refetch
    pub misses: u64,
    /// Entries a caller rejected as older than its freshness window
    pub stale: u64,
    /// Entries dropped to stay within capacity
    pub evictions: u64,
    /// Current occupancy
    pub entries: usize,
    /// Fixed capacity
    pub capacity: usize,
}

impl CacheStats {
    /// Zeroed counters for a cache of the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Recording ==
    /// Counts a lookup that found the key.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Counts a lookup for an absent key.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Moves the preceding hit into the miss column: the entry was found
    /// but was too old to serve.
    pub fn record_stale(&mut self) {
        self.hits = self.hits.saturating_sub(1);
        self.misses += 1;
        self.stale += 1;
    }

    /// Counts an entry dropped by capacity pressure.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
