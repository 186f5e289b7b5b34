//! Request, response and domain models for the weather/AQI API
//!
//! This module defines the DTOs serialized into HTTP bodies and stored in
//! the cache.

pub mod aqi;
pub mod reports;
pub mod requests;
pub mod responses;
pub mod weather;

// Re-export commonly used types
pub use aqi::{AqiSnapshot, DataSource};
pub use reports::{AlertsReport, AnalyticsReport, PredictionReport};
pub use requests::{CityPath, CoordinatesQuery};
pub use responses::{
    CacheClearedResponse, ErrorResponse, HealthResponse, StatsResponse, WeatherUnavailable,
};
pub use weather::{Coordinates, DailyPoint, HourlyPoint, Place, WeatherSnapshot};
