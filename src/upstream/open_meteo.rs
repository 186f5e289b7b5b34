//! Open-Meteo HTTP client
//!
//! Geocoding (`/v1/search`) and forecast (`/v1/forecast`) calls over
//! `reqwest`, each with its own timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use super::{ForecastQuery, ForecastResponse, UpstreamError, WeatherProvider};
use crate::config::Config;
use crate::models::{Coordinates, Place};

/// Default geocoding endpoint
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
/// Default forecast endpoint
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

impl From<GeocodingResult> for Place {
    fn from(result: GeocodingResult) -> Self {
        Place {
            name: result.name,
            lat: result.latitude,
            lon: result.longitude,
            country: result.country,
        }
    }
}

/// Client for the Open-Meteo geocoding and forecast APIs
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
    geocoding_timeout: Duration,
    forecast_timeout: Duration,
}

impl OpenMeteoClient {
    /// Client with the endpoints and timeouts from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: Client::new(),
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
            geocoding_timeout: Duration::from_millis(config.geocoding_timeout_ms),
            forecast_timeout: Duration::from_millis(config.forecast_timeout_ms),
        }
    }

    fn check_status(response: Response) -> Result<Response, UpstreamError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(UpstreamError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn geocode(&self, name: &str) -> Result<Option<Place>, UpstreamError> {
        debug!(city = name, "geocoding lookup");

        let response = self
            .client
            .get(&self.geocoding_url)
            .query(&[("name", name), ("count", "1")])
            .timeout(self.geocoding_timeout)
            .send()
            .await?;
        let body: GeocodingResponse = Self::check_status(response)?.json().await?;

        Ok(body.results.into_iter().next().map(Place::from))
    }

    async fn forecast(
        &self,
        coords: Coordinates,
        query: &ForecastQuery,
    ) -> Result<ForecastResponse, UpstreamError> {
        debug!(lat = coords.lat, lon = coords.lon, "forecast fetch");

        let mut params = vec![
            ("latitude", coords.lat.to_string()),
            ("longitude", coords.lon.to_string()),
            ("timezone", "auto".to_string()),
        ];
        params.extend(query.params());

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&params)
            .timeout(self.forecast_timeout)
            .send()
            .await?;

        Ok(Self::check_status(response)?.json().await?)
    }
}
