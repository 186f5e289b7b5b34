//! Application state shared across all handlers.

use std::sync::Arc;

use crate::aqi::{AqiSource, SimulatedAqi};
use crate::cache::{SharedCache, AQI_TTL_MS, WEATHER_TTL_MS};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::store::{MemoryStore, NullStore, Persistence};
use crate::upstream::{OpenMeteoClient, WeatherProvider};

/// Freshness windows applied to cached snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub weather_ttl_ms: u64,
    pub aqi_ttl_ms: u64,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            weather_ttl_ms: WEATHER_TTL_MS,
            aqi_ttl_ms: AQI_TTL_MS,
        }
    }
}

/// Cache plus every collaborator a request may touch.
///
/// Cloning is cheap: each field is a shared handle.
#[derive(Clone)]
pub struct AppState {
    pub cache: SharedCache,
    pub provider: Arc<dyn WeatherProvider>,
    pub aqi: Arc<dyn AqiSource>,
    pub store: Arc<dyn Persistence>,
    pub clock: Arc<dyn Clock>,
    pub policy: CachePolicy,
    /// Allowed CORS origin; any origin when `None`
    pub frontend_url: Option<String>,
}

impl AppState {
    /// State with simulated AQI, no persistence and the wall clock.
    pub fn new(cache: SharedCache, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            cache,
            provider,
            aqi: Arc::new(SimulatedAqi),
            store: Arc::new(NullStore),
            clock: Arc::new(SystemClock),
            policy: CachePolicy::default(),
            frontend_url: None,
        }
    }

    pub fn with_aqi(mut self, aqi: Arc<dyn AqiSource>) -> Self {
        self.aqi = aqi;
        self
    }

    pub fn with_store(mut self, store: Arc<dyn Persistence>) -> Self {
        self.store = store;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_frontend_url(mut self, frontend_url: Option<String>) -> Self {
        self.frontend_url = frontend_url;
        self
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails when the configured cache capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = SharedCache::new(config.cache_capacity)?;
        let provider = Arc::new(OpenMeteoClient::from_config(config));
        let store: Arc<dyn Persistence> = if config.persistence_enabled {
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(NullStore)
        };

        Ok(Self::new(cache, provider)
            .with_store(store)
            .with_policy(CachePolicy {
                weather_ttl_ms: config.weather_ttl_ms,
                aqi_ttl_ms: config.aqi_ttl_ms,
            })
            .with_frontend_url(config.frontend_url.clone()))
    }
}
