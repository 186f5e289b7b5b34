//! Weather DTOs
//!
//! Reshaped (row-oriented) weather data served by `/api/weather/:city` and
//! consumed by the analysis functions.

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A geocoded city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Canonical name reported by the geocoder
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Place {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// One hour of forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPoint {
    pub time: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub pressure: Option<f64>,
}

/// One day of forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: String,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub precipitation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed_max: Option<f64>,
}

/// Current conditions plus hourly and daily series for one city.
///
/// Every current-condition field is optional: the upstream service omits
/// variables it cannot provide, and the dashboard renders `null` as "n/a".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub precipitation: Option<f64>,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = WeatherSnapshot {
            city: "London".to_string(),
            wind_speed: Some(12.5),
            cloud_cover: Some(80.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["windSpeed"], 12.5);
        assert_eq!(json["cloudCover"], 80.0);
        assert!(json["temperature"].is_null());
        assert!(json["hourly"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_daily_point_omits_missing_wind() {
        let day = DailyPoint {
            date: "2024-06-01".to_string(),
            max_temp: Some(21.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("maxTemp"));
        assert!(!json.contains("windSpeedMax"));
    }

    #[test]
    fn test_place_coordinates() {
        let place = Place {
            name: "Paris".to_string(),
            lat: 48.85,
            lon: 2.35,
            country: None,
        };
        assert_eq!(place.coordinates(), Coordinates { lat: 48.85, lon: 2.35 });
    }
}
