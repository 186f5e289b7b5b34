//! Forecast-derived reports: rain prediction, analytics and alerts.

use super::{air_quality, current_weather, persist, resolve_place};
use crate::alerts::generate_alerts;
use crate::analysis::predict_rain;
use crate::cache::normalize_city;
use crate::clock::to_rfc3339;
use crate::error::Result;
use crate::models::{AlertsReport, AnalyticsReport, PredictionReport};
use crate::state::AppState;
use crate::store::{PredictionRecord, Record, PREDICTION_RETENTION_MS};
use crate::upstream::{ForecastQuery, UpstreamError};

/// Rain prediction over the next 24 forecast hours, valid for one day.
pub async fn predictions(state: &AppState, city: &str) -> Result<PredictionReport> {
    let place = resolve_place(state, city).await?;
    let response = state
        .provider
        .forecast(place.coordinates(), &ForecastQuery::predictions())
        .await?;
    let prediction = predict_rain(&response.hourly_rows());

    let now = state.clock.now_ms();
    let valid_until = now.saturating_add(PREDICTION_RETENTION_MS);

    persist(
        state,
        Record::Prediction(PredictionRecord {
            city: normalize_city(city),
            rain_probability: prediction.probability,
            factors: prediction.factors.clone(),
            confidence: prediction.confidence,
            predicted_at: now,
            valid_until,
        }),
    )
    .await;

    Ok(PredictionReport::new(
        place.name,
        prediction,
        to_rfc3339(now),
        to_rfc3339(valid_until),
    ))
}

/// Temperature, precipitation and wind summary over the daily forecast.
pub async fn analytics(state: &AppState, city: &str) -> Result<AnalyticsReport> {
    let place = resolve_place(state, city).await?;
    let response = state
        .provider
        .forecast(place.coordinates(), &ForecastQuery::analytics())
        .await?;

    let generated_at = to_rfc3339(state.clock.now_ms());
    let report = AnalyticsReport::from_daily(place.name, &response.daily_rows(), generated_at)
        .ok_or_else(|| UpstreamError::MissingField("daily".to_string()))?;

    Ok(report)
}

/// Threshold alerts from current weather, AQI and the rain outlook.
pub async fn alerts(state: &AppState, city: &str) -> Result<AlertsReport> {
    let weather = current_weather(state, city).await?;
    let aqi = air_quality(state, city).await;
    let rain = predict_rain(&weather.hourly);

    let alerts = generate_alerts(weather.temperature, Some(aqi.aqi), Some(rain.probability));
    Ok(AlertsReport::new(
        weather.city,
        alerts,
        to_rfc3339(state.clock.now_ms()),
    ))
}
