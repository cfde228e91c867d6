//! Countdown tick background task

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::{
    state::TimerState,
    view::TimerSnapshot,
};

/// Background task that decrements the countdown once per second
///
/// Each tick reads the latest stored state and writes the decremented value
/// back under the same lock; nothing is captured from the moment the
/// schedule was created. A tick belonging to a cancelled schedule (its
/// generation no longer matches) exits without applying anything, so a
/// stale schedule can never double-decrement a restarted timer.
pub async fn countdown_tick_task(
    state: Arc<Mutex<TimerState>>,
    update_tx: watch::Sender<TimerSnapshot>,
    generation: u64,
) {
    debug!("Starting countdown tick task (generation {})", generation);

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first interval tick completes immediately; consume it so the
    // first decrement lands a full second after start.
    interval.tick().await;

    loop {
        interval.tick().await;

        let snapshot = {
            let mut state = match state.lock() {
                Ok(state) => state,
                Err(e) => {
                    error!("Failed to lock timer state from tick task: {}", e);
                    return;
                }
            };

            if !state.running || state.generation != generation {
                debug!(
                    "Tick for stale schedule (generation {}), exiting",
                    generation
                );
                return;
            }

            state.remaining_seconds = state.remaining_seconds.saturating_sub(1);

            if state.is_expired() {
                // Countdown is terminal at zero: stop running and let the
                // schedule cancel itself.
                state.running = false;
                info!("Countdown expired in {} mode", state.mode.label());
            }

            TimerSnapshot::from_state(&state)
        };

        let finished = !snapshot.is_running;

        if let Err(e) = update_tx.send(snapshot) {
            warn!("Failed to send timer update: {}", e);
        }

        if finished {
            return;
        }
    }
}
