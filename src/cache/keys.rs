//! Cache key construction.
//!
//! Keys are a purpose tag plus a normalised identifier. Normalise first so
//! "London", " london " and "LONDON" share one entry.

/// Trims surrounding whitespace and lowercases.
pub fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}

pub fn geo_key(city: &str) -> String {
    format!("geo_{}", normalize_city(city))
}

pub fn weather_key(city: &str) -> String {
    format!("weather_{}", normalize_city(city))
}

pub fn aqi_key(city: &str) -> String {
    format!("aqi_{}", normalize_city(city))
}

/// Coordinate-keyed AQI entry.
pub fn aqi_coord_key(lat: f64, lon: f64) -> String {
    format!("aqi_{lat}_{lon}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive() {
        assert_eq!(weather_key("London"), "weather_london");
        assert_eq!(weather_key("  LONDON "), weather_key("london"));
        assert_eq!(geo_key("Paris"), "geo_paris");
        assert_eq!(aqi_key("New York"), "aqi_new york");
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        assert_ne!(geo_key("rome"), weather_key("rome"));
        assert_ne!(weather_key("rome"), aqi_key("rome"));
    }

    #[test]
    fn test_coord_key() {
        assert_eq!(aqi_coord_key(51.5, -0.12), "aqi_51.5_-0.12");
    }
}
