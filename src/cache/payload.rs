//! Values held by the shared cache.

use serde::{Deserialize, Serialize};

use crate::models::{AqiSnapshot, Place, WeatherSnapshot};

/// Tagged payload; the key namespace decides which variant is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum CachedPayload {
    Place(Place),
    Weather(WeatherSnapshot),
    Aqi(AqiSnapshot),
}

impl CachedPayload {
    pub fn into_place(self) -> Option<Place> {
        match self {
            CachedPayload::Place(place) => Some(place),
            _ => None,
        }
    }

    pub fn into_weather(self) -> Option<WeatherSnapshot> {
        match self {
            CachedPayload::Weather(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn into_aqi(self) -> Option<AqiSnapshot> {
        match self {
            CachedPayload::Aqi(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

impl From<Place> for CachedPayload {
    fn from(place: Place) -> Self {
        CachedPayload::Place(place)
    }
}

impl From<WeatherSnapshot> for CachedPayload {
    fn from(snapshot: WeatherSnapshot) -> Self {
        CachedPayload::Weather(snapshot)
    }
}

impl From<AqiSnapshot> for CachedPayload {
    fn from(snapshot: AqiSnapshot) -> Self {
        CachedPayload::Aqi(snapshot)
    }
}
