//! Geocoding and current-weather lookups.

use tracing::{debug, warn};

use super::persist;
use crate::cache::{geo_key, normalize_city, weather_key, Freshness, Timestamped};
use crate::error::{AppError, Result};
use crate::models::{Place, WeatherSnapshot};
use crate::state::AppState;
use crate::store::{Record, WeatherRecord};
use crate::upstream::{reshape_weather, ForecastQuery};

/// Resolves a city through the `geo_` cache, geocoding on a miss.
///
/// Geocoding results never go stale; only capacity pressure evicts them.
pub async fn resolve_place(state: &AppState, city: &str) -> Result<Place> {
    let key = geo_key(city);
    let now = state.clock.now_ms();

    if let Some(entry) = state.cache.get(&key).await {
        if entry.is_fresh(now, Freshness::Forever) {
            if let Some(place) = entry.data.into_place() {
                return Ok(place);
            }
        }
    }

    let place = state
        .provider
        .geocode(city.trim())
        .await?
        .ok_or_else(|| AppError::CityNotFound(city.trim().to_string()))?;

    debug!(city = %place.name, lat = place.lat, lon = place.lon, "geocoded");
    state
        .cache
        .set(key, Timestamped::new(place.clone().into(), now))
        .await;

    Ok(place)
}

/// Current conditions for `city`.
///
/// Order of lookup: fresh cache entry, a persisted snapshot younger than
/// the weather window, then the upstream forecast. Upstream failures leave
/// the cache untouched.
pub async fn current_weather(state: &AppState, city: &str) -> Result<WeatherSnapshot> {
    let city_key = normalize_city(city);
    let key = weather_key(city);
    let ttl = state.policy.weather_ttl_ms;
    let now = state.clock.now_ms();

    if let Some(entry) = state.cache.get(&key).await {
        if entry.is_fresh(now, Freshness::Within(ttl)) {
            if let Some(snapshot) = entry.data.into_weather() {
                return Ok(snapshot);
            }
        } else {
            state.cache.record_stale().await;
        }
    }

    // Strictly younger than the window, matching cache freshness
    let since = now.saturating_add(1).saturating_sub(ttl);
    match state.store.latest_weather(&city_key, since).await {
        Ok(Some(record)) => {
            debug!(city = %city_key, "weather served from store");
            state
                .cache
                .set(
                    key,
                    Timestamped::new(record.snapshot.clone().into(), record.recorded_at),
                )
                .await;
            return Ok(record.snapshot);
        }
        Ok(None) => {}
        Err(e) => warn!(city = %city_key, error = %e, "store lookup failed"),
    }

    let place = resolve_place(state, city).await?;
    let response = state
        .provider
        .forecast(place.coordinates(), &ForecastQuery::weather())
        .await?;
    let snapshot = reshape_weather(&place, &response);

    let fetched_at = state.clock.now_ms();
    state
        .cache
        .set(key, Timestamped::new(snapshot.clone().into(), fetched_at))
        .await;
    persist(
        state,
        Record::Weather(WeatherRecord {
            city: city_key,
            snapshot: snapshot.clone(),
            recorded_at: fetched_at,
        }),
    )
    .await;

    Ok(snapshot)
}
