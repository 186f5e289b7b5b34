//! Timestamped Value Module
//!
//! Wrapper stored as every cache value: the payload plus the epoch
//! milliseconds at insertion. The cache itself never inspects the
//! timestamp; each call site judges freshness with its own window.

use serde::{Deserialize, Serialize};

use crate::clock::to_rfc3339;

// == Freshness ==
/// Staleness policy chosen by a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Fresh while the value is younger than this many milliseconds
    Within(u64),
    /// Never goes stale (e.g. geocoding results)
    Forever,
}

// == Timestamped ==
/// `{ data, timestamp }` pair stored under a cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamped<T> {
    /// The cached payload
    pub data: T,
    /// Insertion time (Unix milliseconds)
    pub timestamp: u64,
}

impl<T> Timestamped<T> {
    pub fn new(data: T, timestamp: u64) -> Self {
        Self { data, timestamp }
    }

    /// Milliseconds elapsed since insertion; zero if `now` precedes it.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.timestamp)
    }

    // == Is Fresh ==
    /// Boundary condition: a value whose age equals the window is stale.
    pub fn is_fresh(&self, now: u64, freshness: Freshness) -> bool {
        match freshness {
            Freshness::Within(window) => self.age_ms(now) < window,
            Freshness::Forever => true,
        }
    }

    /// Insertion time as RFC 3339, used for `cachedAt` fields.
    pub fn cached_at(&self) -> String {
        to_rfc3339(self.timestamp)
    }
}
