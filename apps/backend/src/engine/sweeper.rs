use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::SessionEngine;

/// Periodically evict sessions idle longer than `ttl`.
///
/// The task runs until the returned handle is aborted or the runtime stops.
pub fn spawn_idle_sweeper(
    engine: Arc<SessionEngine>,
    ttl: Duration,
    every: Duration,
) -> JoinHandle<()> {
    info!(
        ttl_secs = ttl.as_secs(),
        every_secs = every.as_secs(),
        "Starting idle session sweeper"
    );
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // first tick fires immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let evicted = engine.evict_idle(ttl);
            if evicted > 0 {
                info!(
                    evicted,
                    remaining = engine.active_sessions(),
                    "Evicted idle game sessions"
                );
            } else {
                debug!(remaining = engine.active_sessions(), "No idle game sessions");
            }
        }
    })
}
