//! Configuration Module
//!
//! Loads server configuration from environment variables. Unset or
//! unparsable values fall back to their defaults.

use std::env;
use std::str::FromStr;

use crate::cache::{AQI_TTL_MS, DEFAULT_CAPACITY, WEATHER_TTL_MS};
use crate::upstream::{FORECAST_URL, GEOCODING_URL};

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Allowed CORS origin; any origin when unset
    pub frontend_url: Option<String>,
    /// Maximum number of entries the recency cache holds
    pub cache_capacity: usize,
    /// Freshness window for weather snapshots
    pub weather_ttl_ms: u64,
    /// Freshness window for AQI snapshots
    pub aqi_ttl_ms: u64,
    pub geocoding_url: String,
    pub forecast_url: String,
    pub geocoding_timeout_ms: u64,
    pub forecast_timeout_ms: u64,
    /// Write served snapshots to the document store
    pub persistence_enabled: bool,
    /// Expired-document purge interval in seconds
    pub purge_interval: u64,
}

fn var_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 5000)
    /// - `FRONTEND_URL` - allowed CORS origin (default: any)
    /// - `CACHE_CAPACITY` - recency cache capacity (default: 100)
    /// - `WEATHER_TTL_MS` - weather freshness window (default: 600000)
    /// - `AQI_TTL_MS` - AQI freshness window (default: 900000)
    /// - `GEOCODING_URL`, `FORECAST_URL` - Open-Meteo endpoints
    /// - `GEOCODING_TIMEOUT_MS` (default: 5000), `FORECAST_TIMEOUT_MS` (default: 12000)
    /// - `PERSISTENCE_ENABLED` - `true` to keep history (default: false)
    /// - `PURGE_INTERVAL` - purge frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: var_or("PORT", defaults.server_port),
            frontend_url: env::var("FRONTEND_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            cache_capacity: var_or("CACHE_CAPACITY", defaults.cache_capacity),
            weather_ttl_ms: var_or("WEATHER_TTL_MS", defaults.weather_ttl_ms),
            aqi_ttl_ms: var_or("AQI_TTL_MS", defaults.aqi_ttl_ms),
            geocoding_url: var_or("GEOCODING_URL", defaults.geocoding_url),
            forecast_url: var_or("FORECAST_URL", defaults.forecast_url),
            geocoding_timeout_ms: var_or("GEOCODING_TIMEOUT_MS", defaults.geocoding_timeout_ms),
            forecast_timeout_ms: var_or("FORECAST_TIMEOUT_MS", defaults.forecast_timeout_ms),
            persistence_enabled: var_or("PERSISTENCE_ENABLED", defaults.persistence_enabled),
            purge_interval: var_or("PURGE_INTERVAL", defaults.purge_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            frontend_url: None,
            cache_capacity: DEFAULT_CAPACITY,
            weather_ttl_ms: WEATHER_TTL_MS,
            aqi_ttl_ms: AQI_TTL_MS,
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            geocoding_timeout_ms: 5_000,
            forecast_timeout_ms: 12_000,
            persistence_enabled: false,
            purge_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_capacity, 100);
        assert_eq!(config.weather_ttl_ms, 600_000);
        assert_eq!(config.aqi_ttl_ms, 900_000);
        assert_eq!(config.forecast_timeout_ms, 12_000);
        assert_eq!(config.geocoding_url, "https://geocoding-api.open-meteo.com/v1/search");
        assert_eq!(config.forecast_url, "https://api.open-meteo.com/v1/forecast");
        assert!(config.frontend_url.is_none());
        assert!(!config.persistence_enabled);
    }

    // Single test touches the environment so parallel tests don't race on it
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("FRONTEND_URL");
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("PERSISTENCE_ENABLED");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_capacity, 100);
        assert!(config.frontend_url.is_none());

        env::set_var("PORT", "8080");
        env::set_var("CACHE_CAPACITY", "not-a-number");
        env::set_var("FRONTEND_URL", "http://localhost:3000");
        env::set_var("PERSISTENCE_ENABLED", "true");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cache_capacity, 100);
        assert_eq!(config.frontend_url.as_deref(), Some("http://localhost:3000"));
        assert!(config.persistence_enabled);

        env::remove_var("PORT");
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("FRONTEND_URL");
        env::remove_var("PERSISTENCE_ENABLED");
    }
}
