//! Persistence Module
//!
//! Optional write-through history of served snapshots. Writes are best
//! effort: services log a failed save and still answer the request.
//!
//! Collections expire documents on their own schedule:
//! - weather: newest snapshot per city, replaced on save
//! - aqi: 7 days
//! - predictions: 1 day

mod memory;

pub use memory::{MemoryStore, NullStore};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::Confidence;
use crate::models::WeatherSnapshot;

/// AQI documents live for 7 days
pub const AQI_RETENTION_MS: u64 = 7 * 24 * 60 * 60 * 1000;
/// Prediction documents live for 1 day
pub const PREDICTION_RETENTION_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Normalised city key the snapshot was requested under
    pub city: String,
    pub snapshot: WeatherSnapshot,
    pub recorded_at: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiRecord {
    pub city: String,
    pub aqi: u32,
    pub pm25: u32,
    pub pm10: u32,
    pub co: u32,
    pub no2: u32,
    pub o3: u32,
    pub category: String,
    pub recorded_at: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub city: String,
    /// 0..=100
    pub rain_probability: u8,
    pub factors: Vec<String>,
    pub confidence: Confidence,
    pub predicted_at: u64,
    pub valid_until: u64,
}

/// One persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "collection", rename_all = "lowercase")]
pub enum Record {
    Weather(WeatherRecord),
    Aqi(AqiRecord),
    Prediction(PredictionRecord),
}

impl Record {
    pub fn collection(&self) -> &'static str {
        match self {
            Record::Weather(_) => "weather",
            Record::Aqi(_) => "aqi",
            Record::Prediction(_) => "prediction",
        }
    }

    /// Absolute expiry (Unix ms), if the collection expires documents.
    pub fn expires_at(&self) -> Option<u64> {
        match self {
            Record::Weather(_) => None,
            Record::Aqi(r) => Some(r.recorded_at.saturating_add(AQI_RETENTION_MS)),
            Record::Prediction(r) => Some(r.predicted_at.saturating_add(PREDICTION_RETENTION_MS)),
        }
    }

    /// Rejects documents that violate collection constraints.
    pub fn validate(&self) -> Result<(), StoreError> {
        match self {
            Record::Weather(r) if r.city.is_empty() => {
                Err(StoreError::InvalidRecord("weather city is required".to_string()))
            }
            Record::Aqi(r) if r.city.is_empty() => {
                Err(StoreError::InvalidRecord("aqi city is required".to_string()))
            }
            Record::Prediction(r) if r.rain_probability > 100 => Err(StoreError::InvalidRecord(
                format!("rain probability {} exceeds 100", r.rain_probability),
            )),
            _ => Ok(()),
        }
    }
}

/// Document sink behind the services.
#[async_trait]
pub trait Persistence: Send + Sync {
    async fn save(&self, record: Record) -> Result<(), StoreError>;

    /// Newest weather snapshot for `city` recorded at or after `since_ms`.
    async fn latest_weather(
        &self,
        city: &str,
        since_ms: u64,
    ) -> Result<Option<WeatherRecord>, StoreError>;

    /// Drops documents whose expiry is at or before `now_ms`.
    async fn purge_expired(&self, now_ms: u64) -> Result<usize, StoreError>;
}
