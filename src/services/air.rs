//! Air-quality lookups, keyed by city or by coordinates.

use super::persist;
use crate::analysis::categorize_aqi;
use crate::cache::{aqi_coord_key, aqi_key, normalize_city, Freshness, Timestamped};
use crate::clock::to_rfc3339;
use crate::models::{AqiSnapshot, Coordinates, DataSource};
use crate::state::AppState;
use crate::store::{AqiRecord, Record};

/// AQI for `city`: the cached reading while fresh, otherwise a new sample.
pub async fn air_quality(state: &AppState, city: &str) -> AqiSnapshot {
    lookup(
        state,
        aqi_key(city),
        city.trim().to_string(),
        normalize_city(city),
    )
    .await
}

/// AQI for a coordinate pair, cached under `aqi_<lat>_<lon>`.
pub async fn air_quality_at(state: &AppState, coords: Coordinates) -> AqiSnapshot {
    let label = format!("{},{}", coords.lat, coords.lon);
    lookup(
        state,
        aqi_coord_key(coords.lat, coords.lon),
        label.clone(),
        label,
    )
    .await
}

async fn lookup(state: &AppState, key: String, label: String, record_city: String) -> AqiSnapshot {
    let now = state.clock.now_ms();

    if let Some(entry) = state.cache.get(&key).await {
        if entry.is_fresh(now, Freshness::Within(state.policy.aqi_ttl_ms)) {
            let cached_at = entry.cached_at();
            if let Some(snapshot) = entry.data.into_aqi() {
                return snapshot.from_cache(cached_at);
            }
        } else {
            state.cache.record_stale().await;
        }
    }

    let reading = state.aqi.sample(&label);
    let level = categorize_aqi(reading.aqi);
    let snapshot = AqiSnapshot {
        city: label,
        aqi: reading.aqi,
        pm25: reading.pm25,
        pm10: reading.pm10,
        co: reading.co,
        no2: reading.no2,
        o3: reading.o3,
        category: String::new(),
        color: String::new(),
        priority: 0,
        description: String::new(),
        source: DataSource::Simulated,
        timestamp: to_rfc3339(now),
        cached_at: None,
    }
    .with_level(level);

    state
        .cache
        .set(key, Timestamped::new(snapshot.clone().into(), now))
        .await;
    persist(
        state,
        Record::Aqi(AqiRecord {
            city: record_city,
            aqi: reading.aqi,
            pm25: reading.pm25,
            pm10: reading.pm10,
            co: reading.co,
            no2: reading.no2,
            o3: reading.o3,
            category: level.label().to_string(),
            recorded_at: now,
        }),
    )
    .await;

    snapshot
}
