//! API Module
//!
//! HTTP handlers and routing for the weather/AQI REST API.
//!
//! # Endpoints
//! - `GET /api/weather/:city` - Current weather
//! - `GET /api/aqi/:city`, `GET /api/aqi?lat=..&lon=..` - Air quality
//! - `GET /api/predictions/:city` - Rain prediction
//! - `GET /api/analytics/:city` - Forecast analytics
//! - `GET /api/alerts/:city` - Threshold alerts
//! - `GET /api/cache/stats`, `DELETE /api/cache` - Cache administration
//! - `GET /`, `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use crate::state::AppState;
pub use handlers::*;
pub use routes::create_router;
