//! In-process document store.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Persistence, Record, StoreError, WeatherRecord};

#[derive(Debug)]
struct Document {
    record: Record,
    expires_at: Option<u64>,
}

/// Keeps documents in memory until they expire.
///
/// Weather documents never expire, so only the newest one per city is
/// kept; an older snapshot saved late is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Documents in one collection, oldest first.
    pub async fn records(&self, collection: &str) -> Vec<Record> {
        self.documents
            .lock()
            .await
            .iter()
            .filter(|doc| doc.record.collection() == collection)
            .map(|doc| doc.record.clone())
            .collect()
    }
}

#[async_trait]
impl Persistence for MemoryStore {
    async fn save(&self, record: Record) -> Result<(), StoreError> {
        record.validate()?;
        let expires_at = record.expires_at();
        let mut documents = self.documents.lock().await;

        if let Record::Weather(incoming) = &record {
            let existing = documents.iter_mut().find(|doc| {
                matches!(&doc.record, Record::Weather(r) if r.city == incoming.city)
            });
            if let Some(doc) = existing {
                let newer = match &doc.record {
                    Record::Weather(current) => incoming.recorded_at >= current.recorded_at,
                    _ => true,
                };
                if newer {
                    doc.record = record;
                    doc.expires_at = expires_at;
                }
                return Ok(());
            }
        }

        documents.push(Document { record, expires_at });
        Ok(())
    }

    async fn latest_weather(
        &self,
        city: &str,
        since_ms: u64,
    ) -> Result<Option<WeatherRecord>, StoreError> {
        let documents = self.documents.lock().await;
        let latest = documents
            .iter()
            .filter_map(|doc| match &doc.record {
                Record::Weather(r) if r.city == city && r.recorded_at >= since_ms => Some(r),
                _ => None,
            })
            .max_by_key(|r| r.recorded_at)
            .cloned();
        Ok(latest)
    }

    async fn purge_expired(&self, now_ms: u64) -> Result<usize, StoreError> {
        let mut documents = self.documents.lock().await;
        let before = documents.len();
        documents.retain(|doc| doc.expires_at.map_or(true, |at| at > now_ms));
        Ok(before - documents.len())
    }
}

/// Sink used when persistence is disabled: accepts and forgets.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

#[async_trait]
impl Persistence for NullStore {
    async fn save(&self, _record: Record) -> Result<(), StoreError> {
        Ok(())
    }

    async fn latest_weather(
        &self,
        _city: &str,
        _since_ms: u64,
    ) -> Result<Option<WeatherRecord>, StoreError> {
        Ok(None)
    }

    async fn purge_expired(&self, _now_ms: u64) -> Result<usize, StoreError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    use crate::models::WeatherSnapshot;
    use crate::store::{AqiRecord, AQI_RETENTION_MS};

    fn weather(city: &str, at: u64, temperature: f64) -> Record {
        Record::Weather(WeatherRecord {
            city: city.to_string(),
            snapshot: WeatherSnapshot {
                city: city.to_string(),
                temperature: Some(temperature),
                ..Default::default()
            },
            recorded_at: at,
        })
    }

    fn aqi(at: u64) -> Record {
        Record::Aqi(AqiRecord {
            city: "delhi".to_string(),
            aqi: 90,
            pm25: 36,
            pm10: 54,
            co: 2,
            no2: 20,
            o3: 30,
            category: "Moderate".to_string(),
            recorded_at: at,
        })
    }

    #[tokio::test]
    async fn test_latest_weather_picks_newest_in_window() {
        let store = MemoryStore::new();
        store.save(weather("london", 1_000, 10.0)).await.unwrap();
        store.save(weather("london", 5_000, 12.0)).await.unwrap();
        store.save(weather("paris", 6_000, 20.0)).await.unwrap();

        let latest = store.latest_weather("london", 2_000).await.unwrap().unwrap();
        assert_eq!(latest.recorded_at, 5_000);
        assert_eq!(latest.snapshot.temperature, Some(12.0));

        assert!(store.latest_weather("london", 5_001).await.unwrap().is_none());
        assert!(store.latest_weather("rome", 0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_purge_drops_only_expired() {
        let store = MemoryStore::new();
        store.save(aqi(0)).await.unwrap();
        store.save(aqi(10_000)).await.unwrap();
        store.save(weather("london", 0, 10.0)).await.unwrap();

        assert_eq!(store.purge_expired(AQI_RETENTION_MS - 1).await.unwrap(), 0);
        assert_eq!(store.purge_expired(AQI_RETENTION_MS).await.unwrap(), 1);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.records("aqi").await.len(), 1);
        assert_eq!(store.records("weather").await.len(), 1);
    }

    #[tokio::test]
    async fn test_weather_keeps_newest_per_city() {
        let store = MemoryStore::new();
        for at in 0..1_000 {
            store.save(weather("london", at, at as f64)).await.unwrap();
        }
        store.save(weather("paris", 10, 20.0)).await.unwrap();
        // Late arrival of an older snapshot does not win
        store.save(weather("london", 5, -1.0)).await.unwrap();

        assert_eq!(store.records("weather").await.len(), 2);
        let latest = store.latest_weather("london", 0).await.unwrap().unwrap();
        assert_eq!(latest.recorded_at, 999);
        assert_eq!(latest.snapshot.temperature, Some(999.0));
    }

    #[tokio::test]
    async fn test_save_rejects_invalid() {
        let store = MemoryStore::new();
        assert_err!(store.save(weather("", 0, 1.0)).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_null_store_forgets() {
        let store = NullStore;
        assert_ok!(store.save(weather("london", 0, 1.0)).await);
        assert!(store.latest_weather("london", 0).await.unwrap().is_none());
        assert_eq!(store.purge_expired(u64::MAX).await.unwrap(), 0);
    }
}
