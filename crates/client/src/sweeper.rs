//! Background cache maintenance.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use feriados_core::cache::HolidayCache;

/// Periodic cache sweep with an explicit start/stop lifecycle.
///
/// The loop runs on a plain `tokio::spawn`ed task, so it never keeps the
/// process alive by itself; dropping the handle aborts it. Tests that need a
/// deterministic pass call [`HolidayCache::sweep_at`] directly instead of
/// waiting for a tick.
pub struct Sweeper {
    cache: HolidayCache,
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Spawns the sweep loop using the cache's configured interval.
    pub fn start(cache: HolidayCache) -> Self {
        let period = cache.config().sweep_interval;
        Self::with_interval(cache, period)
    }

    /// Spawns the sweep loop with an explicit interval.
    pub fn with_interval(cache: HolidayCache, period: Duration) -> Self {
        let task_cache = cache.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; skip it so the initial
            // sweep happens one full period after startup.
            interval.tick().await;
            loop {
                interval.tick().await;
                tracing::debug!("Cache sweep tick");
                task_cache.sweep().await;
            }
        });
        Self { cache, handle }
    }

    /// Cancels the sweep loop and clears the cache.
    pub async fn shutdown(self) {
        self.handle.abort();
        self.cache.clear().await;
        tracing::info!("Sweeper shut down");
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
