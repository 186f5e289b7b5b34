//! Air-quality DTOs

use serde::{Deserialize, Serialize};

use crate::analysis::AqiLevel;

/// Where an AQI snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Simulated,
    Cache,
}

/// Air-quality reading for one city, as served by `/api/aqi/:city`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AqiSnapshot {
    pub city: String,
    pub aqi: u32,
    pub pm25: u32,
    pub pm10: u32,
    pub co: u32,
    pub no2: u32,
    pub o3: u32,
    pub category: String,
    pub color: String,
    pub priority: u8,
    pub description: String,
    pub source: DataSource,
    /// Generation time (RFC 3339)
    pub timestamp: String,
    /// Set only when served from the cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<String>,
}

impl AqiSnapshot {
    /// Copies the categorisation fields from `level`.
    pub fn with_level(mut self, level: AqiLevel) -> Self {
        self.category = level.label().to_string();
        self.color = level.color().to_string();
        self.priority = level.priority();
        self.description = level.description().to_string();
        self
    }

    /// The same reading relabelled as a cache hit.
    pub fn from_cache(mut self, cached_at: String) -> Self {
        self.source = DataSource::Cache;
        self.cached_at = Some(cached_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AqiSnapshot {
        AqiSnapshot {
            city: "Delhi".to_string(),
            aqi: 120,
            pm25: 48,
            pm10: 72,
            co: 2,
            no2: 20,
            o3: 40,
            category: String::new(),
            color: String::new(),
            priority: 0,
            description: String::new(),
            source: DataSource::Simulated,
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
            cached_at: None,
        }
    }

    #[test]
    fn test_with_level_fills_category() {
        let snapshot = sample().with_level(AqiLevel::UnhealthyForSensitive);
        assert_eq!(snapshot.category, "Unhealthy for Sensitive");
        assert_eq!(snapshot.color, "#f59e0b");
        assert_eq!(snapshot.priority, 2);
    }

    #[test]
    fn test_simulated_snapshot_has_no_cached_at() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["source"], "simulated");
        assert!(json.get("cachedAt").is_none());
    }

    #[test]
    fn test_from_cache_sets_source_and_cached_at() {
        let snapshot = sample().from_cache("2024-01-01T00:05:00+00:00".to_string());
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["source"], "cache");
        assert_eq!(json["cachedAt"], "2024-01-01T00:05:00+00:00");
    }
}
