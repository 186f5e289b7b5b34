//! Request DTOs for the weather/AQI API
//!
//! Defines the path and query parameters accepted by the API.

use serde::Deserialize;

use crate::models::Coordinates;

/// Longest city name accepted, in characters
pub const MAX_CITY_LENGTH: usize = 100;

/// Path parameters for the `/api/*/:city` routes
#[derive(Debug, Clone, Deserialize)]
pub struct CityPath {
    /// City name as typed by the user
    pub city: String,
}

impl CityPath {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let city = self.city.trim();
        if city.is_empty() {
            return Some("City cannot be empty".to_string());
        }
        if city.chars().count() > MAX_CITY_LENGTH {
            return Some(format!(
                "City exceeds maximum length of {} characters",
                MAX_CITY_LENGTH
            ));
        }
        None
    }

    /// City name with surrounding whitespace removed
    pub fn name(&self) -> &str {
        self.city.trim()
    }
}

/// Query parameters for `GET /api/aqi?lat=..&lon=..`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordinatesQuery {
    pub lat: f64,
    pub lon: f64,
}

impl CoordinatesQuery {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Some(format!("Latitude {} is outside [-90, 90]", self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Some(format!("Longitude {} is outside [-180, 180]", self.lon));
        }
        None
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lon: self.lon,
        }
    }
}
