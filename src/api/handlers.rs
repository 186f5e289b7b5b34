//! API Handlers
//!
//! HTTP request handlers for each endpoint. Cache and upstream logic lives
//! in [`crate::services`]; handlers validate input and shape responses.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::clock::to_rfc3339;
use crate::error::{AppError, Result};
use crate::models::{
    AlertsReport, AnalyticsReport, AqiSnapshot, CacheClearedResponse, CityPath, CoordinatesQuery,
    ErrorResponse, HealthResponse, PredictionReport, StatsResponse, WeatherUnavailable,
};
use crate::services;
use crate::state::AppState;

fn validated(params: &CityPath) -> Result<&str> {
    match params.validate() {
        Some(message) => Err(AppError::InvalidRequest(message)),
        None => Ok(params.name()),
    }
}

/// Handler for GET / and GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(to_rfc3339(state.clock.now_ms())))
}

/// Handler for GET /api/weather/:city
///
/// Failures still return the weather shape so the dashboard can render
/// an empty card: 404 when the city is unknown, 200 when upstream fails.
pub async fn weather_handler(
    State(state): State<AppState>,
    Path(params): Path<CityPath>,
) -> Response {
    let city = match validated(&params) {
        Ok(city) => city,
        Err(e) => return e.into_response(),
    };

    match services::current_weather(&state, city).await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(AppError::CityNotFound(_)) => {
            info!(city, "city not found");
            (StatusCode::NOT_FOUND, Json(WeatherUnavailable::city_not_found())).into_response()
        }
        Err(AppError::Upstream(e)) => {
            warn!(city, error = %e, "weather fetch failed");
            (StatusCode::OK, Json(WeatherUnavailable::service_unavailable())).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Handler for GET /api/aqi/:city
pub async fn aqi_handler(
    State(state): State<AppState>,
    Path(params): Path<CityPath>,
) -> Result<Json<AqiSnapshot>> {
    let city = validated(&params)?;
    Ok(Json(services::air_quality(&state, city).await))
}

/// Handler for GET /api/aqi?lat=..&lon=..
pub async fn aqi_at_handler(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<AqiSnapshot>> {
    if let Some(message) = query.validate() {
        return Err(AppError::InvalidRequest(message));
    }
    Ok(Json(services::air_quality_at(&state, query.coordinates()).await))
}

/// Handler for GET /api/predictions/:city
pub async fn predictions_handler(
    State(state): State<AppState>,
    Path(params): Path<CityPath>,
) -> Result<Json<PredictionReport>> {
    let city = validated(&params)?;
    Ok(Json(services::predictions(&state, city).await?))
}

/// Handler for GET /api/analytics/:city
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(params): Path<CityPath>,
) -> Result<Json<AnalyticsReport>> {
    let city = validated(&params)?;
    Ok(Json(services::analytics(&state, city).await?))
}

/// Handler for GET /api/alerts/:city
pub async fn alerts_handler(
    State(state): State<AppState>,
    Path(params): Path<CityPath>,
) -> Result<Json<AlertsReport>> {
    let city = validated(&params)?;
    Ok(Json(services::alerts(&state, city).await?))
}

/// Handler for GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for DELETE /api/cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<CacheClearedResponse> {
    let removed = state.cache.clear().await;
    info!(removed, "cache cleared");
    Json(CacheClearedResponse::new(removed))
}

/// Fallback for unmatched routes
pub async fn not_found_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::route_not_found(
            uri.path(),
            to_rfc3339(state.clock.now_ms()),
        )),
    )
}
