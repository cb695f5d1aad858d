//! Expiry Sweeper
//!
//! Reclaims expired entries in bounded batches, either on demand or from a
//! periodic background task owned by the embedding application.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::store::TtlStore;

/// Removes up to `max_batch` expired entries from `store`.
///
/// Stops early once no expired entry remains. Returns the number removed.
pub fn sweep_expired<C: Clock + ?Sized>(store: &mut TtlStore<'_, C>, max_batch: usize) -> usize {
    let mut removed = 0;

    while removed < max_batch {
        match store.remove_one_expired_entry() {
            Some((key, _)) => {
                debug!(key = %key, "reclaimed expired entry");
                removed += 1;
            }
            None => break,
        }
    }

    removed
}

/// Spawns a background task that periodically sweeps expired entries.
///
/// Each tick takes the write lock once and reclaims at most `max_batch`
/// entries; a larger backlog drains over several ticks.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(TtlStore::empty(&SYSTEM_CLOCK)));
/// let sweeper = spawn_sweeper(store.clone(), Duration::from_secs(1), 100);
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper<C>(
    store: Arc<RwLock<TtlStore<'static, C>>>,
    interval: Duration,
    max_batch: usize,
) -> JoinHandle<()>
where
    C: Clock + Sync + ?Sized + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting expiry sweeper with interval of {:?}, batch of {}",
            interval, max_batch
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut guard = store.write().await;
                let removed = sweep_expired(&mut *guard, max_batch);
                (removed, guard.len())
            };

            if removed > 0 {
                info!(
                    "Sweep: removed {} expired entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Sweep: no expired entries found");
            }
        }
    })
}
