//! Cache Module
//!
//! Bounded recency (LRU) cache plus the conventions layered on top of it:
//! namespaced keys, `{data, timestamp}` values, and a mutex-guarded shared
//! handle. Freshness windows are applied by callers, never by the cache.

mod entry;
mod keys;
mod lru;
mod payload;
mod shared;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{Freshness, Timestamped};
pub use keys::{aqi_coord_key, aqi_key, geo_key, normalize_city, weather_key};
pub use lru::{Iter, RecencyCache};
pub use payload::CachedPayload;
pub use shared::{CacheValue, SharedCache};
pub use stats::CacheStats;

// == Public Constants ==
/// Default number of entries held by the shared cache
pub const DEFAULT_CAPACITY: usize = 100;

/// Freshness window for weather snapshots (10 minutes)
pub const WEATHER_TTL_MS: u64 = 600_000;

/// Freshness window for AQI snapshots (15 minutes)
pub const AQI_TTL_MS: u64 = 900_000;
