//! Open-Meteo forecast payloads and their reshaping into row form.
//!
//! The forecast API returns columnar blocks (`{"time": [...],
//! "temperature_2m": [...]}`); the dashboard wants one object per hour or
//! day. Missing columns become `None` fields. A block without `time`
//! yields no rows.

use serde::Deserialize;

use crate::models::{DailyPoint, HourlyPoint, Place, WeatherSnapshot};

// == Query ==
/// Variable lists requested from `/v1/forecast`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    pub current: &'static [&'static str],
    pub hourly: &'static [&'static str],
    pub daily: &'static [&'static str],
}

impl ForecastQuery {
    /// Current conditions plus hourly and daily series for the weather view.
    pub fn weather() -> Self {
        Self {
            current: &[
                "temperature_2m",
                "relative_humidity_2m",
                "precipitation",
                "cloud_cover",
                "pressure_msl",
                "wind_speed_10m",
            ],
            hourly: &[
                "temperature_2m",
                "relative_humidity_2m",
                "precipitation_probability",
                "cloud_cover",
                "pressure_msl",
            ],
            daily: &[
                "temperature_2m_max",
                "temperature_2m_min",
                "precipitation_sum",
            ],
        }
    }

    /// Hourly series only, for rain prediction.
    pub fn predictions() -> Self {
        Self {
            current: &[],
            hourly: Self::weather().hourly,
            daily: &[],
        }
    }

    /// Daily series with wind maxima, for analytics.
    pub fn analytics() -> Self {
        Self {
            current: &[],
            hourly: &[],
            daily: &[
                "temperature_2m_max",
                "temperature_2m_min",
                "precipitation_sum",
                "wind_speed_10m_max",
            ],
        }
    }

    /// Query-string pairs, omitting empty variable lists.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        [
            ("current", self.current),
            ("hourly", self.hourly),
            ("daily", self.daily),
        ]
        .into_iter()
        .filter(|(_, vars)| !vars.is_empty())
        .map(|(name, vars)| (name, vars.join(",")))
        .collect()
    }
}

// == Response ==
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current: Option<CurrentBlock>,
    #[serde(default)]
    pub hourly: Option<HourlyBlock>,
    #[serde(default)]
    pub daily: Option<DailyBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentBlock {
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub precipitation: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub pressure_msl: Option<f64>,
    pub wind_speed_10m: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub relative_humidity_2m: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub cloud_cover: Vec<Option<f64>>,
    pub pressure_msl: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailyBlock {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub wind_speed_10m_max: Vec<Option<f64>>,
}

fn at(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

impl HourlyBlock {
    pub fn rows(&self) -> Vec<HourlyPoint> {
        self.time
            .iter()
            .enumerate()
            .map(|(i, time)| HourlyPoint {
                time: time.clone(),
                temperature: at(&self.temperature_2m, i),
                humidity: at(&self.relative_humidity_2m, i),
                precipitation_probability: at(&self.precipitation_probability, i),
                cloud_cover: at(&self.cloud_cover, i),
                pressure: at(&self.pressure_msl, i),
            })
            .collect()
    }
}

impl DailyBlock {
    pub fn rows(&self) -> Vec<DailyPoint> {
        self.time
            .iter()
            .enumerate()
            .map(|(i, date)| DailyPoint {
                date: date.clone(),
                max_temp: at(&self.temperature_2m_max, i),
                min_temp: at(&self.temperature_2m_min, i),
                precipitation: at(&self.precipitation_sum, i),
                wind_speed_max: at(&self.wind_speed_10m_max, i),
            })
            .collect()
    }
}

impl ForecastResponse {
    pub fn hourly_rows(&self) -> Vec<HourlyPoint> {
        self.hourly.as_ref().map(HourlyBlock::rows).unwrap_or_default()
    }

    pub fn daily_rows(&self) -> Vec<DailyPoint> {
        self.daily.as_ref().map(DailyBlock::rows).unwrap_or_default()
    }
}

/// Builds the weather view for `place` from a forecast response.
pub fn reshape_weather(place: &Place, response: &ForecastResponse) -> WeatherSnapshot {
    let current = response.current.clone().unwrap_or_default();

    WeatherSnapshot {
        city: place.name.clone(),
        temperature: current.temperature_2m,
        humidity: current.relative_humidity_2m,
        pressure: current.pressure_msl,
        wind_speed: current.wind_speed_10m,
        cloud_cover: current.cloud_cover,
        precipitation: current.precipitation,
        hourly: response.hourly_rows(),
        daily: response.daily_rows(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "current": {"temperature_2m": 14.2, "relative_humidity_2m": 71, "pressure_msl": 1012.5,
                    "wind_speed_10m": 9.4, "cloud_cover": 40, "precipitation": 0.0},
        "hourly": {"time": ["2024-06-01T00:00", "2024-06-01T01:00"],
                   "temperature_2m": [13.9, 13.5],
                   "relative_humidity_2m": [72, null],
                   "precipitation_probability": [5],
                   "cloud_cover": [30, 35],
                   "pressure_msl": [1012.0, 1011.8]},
        "daily": {"time": ["2024-06-01"], "temperature_2m_max": [18.1],
                  "temperature_2m_min": [10.3], "precipitation_sum": [0.4]}
    }"#;

    fn london() -> Place {
        Place {
            name: "London".to_string(),
            lat: 51.5,
            lon: -0.12,
            country: Some("United Kingdom".to_string()),
        }
    }

    #[test]
    fn test_reshape_weather() {
        let response: ForecastResponse = serde_json::from_str(SAMPLE).unwrap();
        let snapshot = reshape_weather(&london(), &response);

        assert_eq!(snapshot.city, "London");
        assert_eq!(snapshot.temperature, Some(14.2));
        assert_eq!(snapshot.humidity, Some(71.0));
        assert_eq!(snapshot.hourly.len(), 2);
        assert_eq!(snapshot.daily.len(), 1);
        assert_eq!(snapshot.daily[0].max_temp, Some(18.1));
        assert_eq!(snapshot.daily[0].wind_speed_max, None);
    }

    #[test]
    fn test_short_and_null_columns_become_none() {
        let response: ForecastResponse = serde_json::from_str(SAMPLE).unwrap();
        let rows = response.hourly_rows();

        assert_eq!(rows[1].humidity, None);
        assert_eq!(rows[0].precipitation_probability, Some(5.0));
        assert_eq!(rows[1].precipitation_probability, None);
    }

    #[test]
    fn test_missing_blocks_yield_empty_snapshot() {
        let response: ForecastResponse = serde_json::from_str("{}").unwrap();
        let snapshot = reshape_weather(&london(), &response);

        assert_eq!(snapshot.temperature, None);
        assert!(snapshot.hourly.is_empty());
        assert!(snapshot.daily.is_empty());
    }

    #[test]
    fn test_block_without_time_has_no_rows() {
        let response: ForecastResponse =
            serde_json::from_str(r#"{"hourly": {"temperature_2m": [1.0, 2.0]}}"#).unwrap();
        assert!(response.hourly_rows().is_empty());
    }

    #[test]
    fn test_query_params_skip_empty_lists() {
        let params = ForecastQuery::analytics().params();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].0, "daily");
        assert!(params[0].1.ends_with("wind_speed_10m_max"));

        let params = ForecastQuery::weather().params();
        let names: Vec<_> = params.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["current", "hourly", "daily"]);
    }
}
