//! Countdown timer component

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    state::{Mode, TimerState},
    tasks::countdown_tick_task,
    view::{format_mm_ss, TimerSnapshot},
};

use super::ScheduleHandle;

/// Countdown timer component owning all timer state and the tick schedule
///
/// The component is shared as `Arc<CountdownTimer>`; every operation takes
/// `&self`. The schedule handle is an owned field, never module-level
/// state, so multiple instances cannot collide.
///
/// Lock order is always the schedule mutex first, then the state mutex.
/// The tick task takes only the state mutex.
#[derive(Debug)]
pub struct CountdownTimer {
    /// Current countdown state, shared with the tick task
    state: Arc<Mutex<TimerState>>,
    /// The active tick registration, if any
    schedule: Mutex<Option<ScheduleHandle>>,
    /// Last control command tracking
    last_command: Mutex<Option<(String, DateTime<Utc>)>>,
    /// Channel for snapshot updates to the presentation layer
    update_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _update_rx: watch::Receiver<TimerSnapshot>,
}

impl CountdownTimer {
    /// Create an idle timer in the given mode at its full duration
    ///
    /// `start()` spawns the tick task, so the component must be used from
    /// within a Tokio runtime.
    pub fn new(mode: Mode) -> Self {
        let state = TimerState::for_mode(mode);
        let (update_tx, update_rx) = watch::channel(TimerSnapshot::from_state(&state));

        Self {
            state: Arc::new(Mutex::new(state)),
            schedule: Mutex::new(None),
            last_command: Mutex::new(None),
            update_tx,
            _update_rx: update_rx,
        }
    }

    /// Start the countdown
    ///
    /// No-op if already running. From idle after a natural expiry the
    /// countdown restarts from the mode's full duration; from a paused
    /// state it resumes from the exact remaining seconds.
    pub fn start(&self) -> Result<TimerState, String> {
        let mut schedule = self.lock_schedule()?;

        let (new_state, generation) = {
            let mut state = self.lock_state()?;
            if state.running {
                debug!("start ignored, countdown already running");
                return Ok(state.clone());
            }
            if state.is_expired() {
                state.reload();
            }
            state.generation += 1;
            state.running = true;
            (state.clone(), state.generation)
        };

        // Cancel any stray schedule before registering a new one
        if let Some(handle) = schedule.take() {
            handle.cancel();
        }

        let task = tokio::spawn(countdown_tick_task(
            Arc::clone(&self.state),
            self.update_tx.clone(),
            generation,
        ));
        *schedule = Some(ScheduleHandle::new(generation, task));

        info!(
            "Countdown started in {} mode at {}",
            new_state.mode.label(),
            format_mm_ss(new_state.remaining_seconds)
        );
        self.record_command("start");
        self.publish(&new_state);
        Ok(new_state)
    }

    /// Pause the countdown, preserving the remaining seconds exactly
    ///
    /// No-op if not running.
    pub fn pause(&self) -> Result<TimerState, String> {
        let mut schedule = self.lock_schedule()?;

        let new_state = {
            let mut state = self.lock_state()?;
            if !state.running {
                debug!("pause ignored, countdown not running");
                return Ok(state.clone());
            }
            state.running = false;
            // Invalidate any in-flight tick before the abort lands
            state.generation += 1;
            state.clone()
        };

        if let Some(handle) = schedule.take() {
            handle.cancel();
        }

        info!(
            "Countdown paused at {}",
            format_mm_ss(new_state.remaining_seconds)
        );
        self.record_command("pause");
        self.publish(&new_state);
        Ok(new_state)
    }

    /// Stop the countdown and restore the current mode's full duration
    pub fn reset(&self) -> Result<TimerState, String> {
        let mut schedule = self.lock_schedule()?;

        let new_state = {
            let mut state = self.lock_state()?;
            state.running = false;
            state.generation += 1;
            state.reload();
            state.clone()
        };

        if let Some(handle) = schedule.take() {
            handle.cancel();
        }

        info!("Countdown reset in {} mode", new_state.mode.label());
        self.record_command("reset");
        self.publish(&new_state);
        Ok(new_state)
    }

    /// Switch to the given mode, stopping the countdown and loading that
    /// mode's full duration
    pub fn select_mode(&self, mode: Mode) -> Result<TimerState, String> {
        let mut schedule = self.lock_schedule()?;

        let new_state = {
            let mut state = self.lock_state()?;
            state.running = false;
            state.generation += 1;
            state.select_mode(mode);
            state.clone()
        };

        if let Some(handle) = schedule.take() {
            handle.cancel();
        }

        info!("Mode set to {}", new_state.mode.label());
        self.record_command("select_mode");
        self.publish(&new_state);
        Ok(new_state)
    }

    /// Get the remaining time formatted as zero-padded "MM:SS"
    pub fn formatted_time(&self) -> Result<String, String> {
        Ok(format_mm_ss(self.lock_state()?.remaining_seconds))
    }

    /// Get the active mode
    pub fn active_mode(&self) -> Result<Mode, String> {
        Ok(self.lock_state()?.mode)
    }

    /// Check whether the countdown is running
    pub fn is_running(&self) -> Result<bool, String> {
        Ok(self.lock_state()?.running)
    }

    /// Get the remaining seconds
    pub fn remaining_seconds(&self) -> Result<u64, String> {
        Ok(self.lock_state()?.remaining_seconds)
    }

    /// Get a snapshot of the current state for the presentation layer
    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        Ok(TimerSnapshot::from_state(&*self.lock_state()?))
    }

    /// Subscribe to snapshot updates published on every command and tick
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.update_tx.subscribe()
    }

    /// Get the last control command and when it was issued
    pub fn last_command(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_command.lock() {
            Ok(last) => match last.as_ref() {
                Some((command, time)) => (Some(command.clone()), Some(*time)),
                None => (None, None),
            },
            Err(_) => (None, None),
        }
    }

    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, TimerState>, String> {
        self.state
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    fn lock_schedule(&self) -> Result<std::sync::MutexGuard<'_, Option<ScheduleHandle>>, String> {
        self.schedule
            .lock()
            .map_err(|e| format!("Failed to lock schedule handle: {}", e))
    }

    fn record_command(&self, command: &str) {
        if let Ok(mut last) = self.last_command.lock() {
            *last = Some((command.to_string(), Utc::now()));
        }
    }

    fn publish(&self, state: &TimerState) {
        if let Err(e) = self.update_tx.send(TimerSnapshot::from_state(state)) {
            warn!("Failed to send timer update: {}", e);
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        if let Ok(mut schedule) = self.schedule.lock() {
            if let Some(handle) = schedule.take() {
                handle.cancel();
            }
        }
    }
}
