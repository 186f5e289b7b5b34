//! Expired-Document Purge Task
//!
//! Background task that periodically drops persisted documents past their
//! collection expiry.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::store::Persistence;

/// Spawns a background task that purges expired documents every
/// `interval_secs` seconds.
///
/// Returns a JoinHandle that should be aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_purge_task(state.store.clone(), state.clock.clone(), 60);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_purge_task(
    store: Arc<dyn Persistence>,
    clock: Arc<dyn Clock>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting purge task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            match store.purge_expired(clock.now_ms()).await {
                Ok(0) => debug!("Purge: no expired documents found"),
                Ok(removed) => info!("Purge: removed {} expired documents", removed),
                Err(e) => warn!(error = %e, "Purge failed"),
            }
        }
    })
}
