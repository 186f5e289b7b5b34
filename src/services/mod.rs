//! Services Module
//!
//! Request-level orchestration: cache lookups with freshness windows,
//! upstream fetches on a miss, and best-effort persistence. Handlers stay
//! thin and call into these functions.

mod air;
mod reports;
mod weather;

pub use air::{air_quality, air_quality_at};
pub use reports::{alerts, analytics, predictions};
pub use weather::{current_weather, resolve_place};

use tracing::warn;

use crate::state::AppState;
use crate::store::Record;

/// Saves a record, logging instead of failing the request.
async fn persist(state: &AppState, record: Record) {
    let collection = record.collection();
    if let Err(e) = state.store.save(record).await {
        warn!(collection, error = %e, "failed to persist record");
    }
}
