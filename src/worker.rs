use crate::metrics::THROTTLE_ENTRIES;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

// Background sweeper -> evicts throttle entries that can no longer affect a
// decision (cooldown elapsed and last listen on an earlier UTC day), keeping
// the table bounded to active keys.
pub async fn sweep_worker(state: Arc<AppState>, interval: Duration) {
    tracing::info!(interval_secs = interval.as_secs(), "sweep worker started");

    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;
        let removed = state.throttle.sweep(Utc::now());
        THROTTLE_ENTRIES.set(state.throttle.len() as f64);
        if removed > 0 {
            tracing::debug!(removed, remaining = state.throttle.len(), "swept throttle table");
        }
    }
}
