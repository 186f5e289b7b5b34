//! Response DTOs for the weather/AQI API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! domain snapshots.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::{DailyPoint, HourlyPoint};

/// Routes advertised by the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub weather: &'static str,
    pub aqi: &'static str,
    pub predictions: &'static str,
    pub analytics: &'static str,
    pub alerts: &'static str,
    pub cache_stats: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            weather: "/api/weather/:city",
            aqi: "/api/aqi/:city",
            predictions: "/api/predictions/:city",
            analytics: "/api/analytics/:city",
            alerts: "/api/alerts/:city",
            cache_stats: "/api/cache/stats",
        }
    }
}

/// Response body for the health endpoints (GET / and GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub message: String,
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    pub endpoints: Endpoints,
}

impl HealthResponse {
    /// Creates a new HealthResponse stamped with `timestamp`
    pub fn healthy(timestamp: String) -> Self {
        Self {
            message: "Weather AQI API is running!".to_string(),
            status: "healthy".to_string(),
            timestamp,
            endpoints: Endpoints::default(),
        }
    }
}

/// Response body for unmatched routes
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    pub path: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn route_not_found(path: impl Into<String>, timestamp: String) -> Self {
        Self {
            error: "Route not found".to_string(),
            path: path.into(),
            timestamp,
        }
    }
}

/// Response body for the stats endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    /// Hits discarded because they were past their freshness window
    pub stale: u64,
    pub evictions: u64,
    pub entries: usize,
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            stale: stats.stale,
            evictions: stats.evictions,
            entries: stats.entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for DELETE /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct CacheClearedResponse {
    pub message: String,
    pub removed: usize,
}

impl CacheClearedResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: "Cache cleared".to_string(),
            removed,
        }
    }
}

/// Empty weather body the dashboard can render without special-casing.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherUnavailable {
    pub temperature: Option<f64>,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
    pub message: String,
}

impl WeatherUnavailable {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            temperature: None,
            hourly: Vec::new(),
            daily: Vec::new(),
            message: message.into(),
        }
    }

    pub fn city_not_found() -> Self {
        Self::new("City not found")
    }

    pub fn service_unavailable() -> Self {
        Self::new("Weather service unavailable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_from_cache_stats() {
        let mut stats = CacheStats::with_capacity(10);
        for _ in 0..4 {
            stats.record_hit();
        }
        stats.record_miss();
        stats.entries = 3;

        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.capacity, 10);
        assert_eq!(resp.entries, 3);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy("2024-01-01T00:00:00+00:00".to_string());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["endpoints"]["weather"], "/api/weather/:city");
    }

    #[test]
    fn test_weather_unavailable_shape() {
        let json = serde_json::to_value(WeatherUnavailable::city_not_found()).unwrap();
        assert!(json["temperature"].is_null());
        assert_eq!(json["hourly"], serde_json::json!([]));
        assert_eq!(json["daily"], serde_json::json!([]));
        assert_eq!(json["message"], "City not found");
    }

    #[test]
    fn test_route_not_found_serialize() {
        let resp = ErrorResponse::route_not_found("/nope", "t".to_string());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"], "Route not found");
        assert_eq!(json["path"], "/nope");
    }
}
