//! API Routes
//!
//! Configures the Axum router with every endpoint, CORS and request tracing.

use axum::{
    http::HeaderValue,
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    alerts_handler, analytics_handler, aqi_at_handler, aqi_handler, clear_cache_handler,
    health_handler, not_found_handler, predictions_handler, stats_handler, weather_handler,
};
use crate::state::AppState;

fn allowed_origin(frontend_url: Option<&str>) -> AllowOrigin {
    match frontend_url.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(_)) => {
            warn!(?frontend_url, "invalid FRONTEND_URL, allowing any origin");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    }
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /`, `GET /health` - Health check
/// - `GET /api/weather/:city` - Current weather with hourly and daily series
/// - `GET /api/aqi/:city` - Air quality
/// - `GET /api/aqi?lat=..&lon=..` - Air quality by coordinates
/// - `GET /api/predictions/:city` - Rain prediction
/// - `GET /api/analytics/:city` - Daily forecast analytics
/// - `GET /api/alerts/:city` - Threshold alerts, most urgent first
/// - `GET /api/cache/stats` - Cache statistics
/// - `DELETE /api/cache` - Clear the cache
///
/// Anything else answers 404 with the requested path.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin(state.frontend_url.as_deref()))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .route("/api/weather/:city", get(weather_handler))
        .route("/api/aqi", get(aqi_at_handler))
        .route("/api/aqi/:city", get(aqi_handler))
        .route("/api/predictions/:city", get(predictions_handler))
        .route("/api/analytics/:city", get(analytics_handler))
        .route("/api/alerts/:city", get(alerts_handler))
        .route("/api/cache/stats", get(stats_handler))
        .route("/api/cache", delete(clear_cache_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
