//! Expired Record Sweep Task
//!
//! Background task that periodically removes expired reports from memory.
//! Readers never see expired reports regardless; this only reclaims space.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::MemoryStore;

/// Spawns a background task that sweeps expired records every `interval`.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(MemoryStore::new());
/// let sweep_handle = spawn_sweep_task(store.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(store: Arc<MemoryStore>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting expired record sweep every {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.sweep_expired().await;
            if removed > 0 {
                info!("Sweep: removed {} expired records", removed);
            } else {
                debug!("Sweep: no expired records found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KvStore, ManualClock};

    fn store_with_clock() -> (Arc<MemoryStore>, ManualClock) {
        let clock = ManualClock::default();
        let store = Arc::new(MemoryStore::with_clock(Arc::new(clock.clone())));
        (store, clock)
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_records() {
        let (store, clock) = store_with_clock();
        store.put("expire_soon", "{}".to_string(), 1).await.unwrap();
        clock.advance_secs(2);

        let handle = spawn_sweep_task(store.clone(), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(store.is_empty().await, "Expired record should have been swept");

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_live_records() {
        let (store, clock) = store_with_clock();
        store.put("long_lived", "{}".to_string(), 3600).await.unwrap();
        clock.advance_secs(60);

        let handle = spawn_sweep_task(store.clone(), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get("long_lived").await.unwrap().as_deref(),
            Some("{}")
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let handle = spawn_sweep_task(Arc::new(MemoryStore::new()), Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
