use std::time::Duration;

use common::log;

use crate::store::GameStore;

/// Periodically drops game sessions that have been idle for too long.
/// Session deletion is purely a store-level concern; the game core never
/// removes anything.
pub struct CleanupTask {
    store: GameStore,
    check_interval: Duration,
    inactivity_timeout: Duration,
}

impl CleanupTask {
    pub fn new(store: GameStore, check_interval: Duration, inactivity_timeout: Duration) -> Self {
        Self {
            store,
            check_interval,
            inactivity_timeout,
        }
    }

    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.check_interval);

        loop {
            interval.tick().await;
            self.cleanup_inactive().await;
        }
    }

    async fn cleanup_inactive(&self) {
        let removed = self.store.remove_inactive(self.inactivity_timeout).await;
        for id in removed {
            log!("Removed inactive game session: {}", id);
        }
    }
}
