//! Upstream Module
//!
//! Fallible collaborators that fetch geocoding and forecast data. The
//! services only see the [`WeatherProvider`] trait; [`OpenMeteoClient`] is
//! the production implementation.

mod forecast;
mod open_meteo;

pub use forecast::{
    reshape_weather, CurrentBlock, DailyBlock, ForecastQuery, ForecastResponse, HourlyBlock,
};
pub use open_meteo::{
    GeocodingResponse, GeocodingResult, OpenMeteoClient, FORECAST_URL, GEOCODING_URL,
};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Coordinates, Place};

/// Errors that can occur when talking to the upstream weather service
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP request failed (connect, timeout, body decode)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),
}

/// Geocoding and forecast lookups.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Resolves a city name; `Ok(None)` when nothing matches.
    async fn geocode(&self, name: &str) -> Result<Option<Place>, UpstreamError>;

    /// Fetches the forecast variables named by `query` for `coords`.
    async fn forecast(
        &self,
        coords: Coordinates,
        query: &ForecastQuery,
    ) -> Result<ForecastResponse, UpstreamError>;
}
