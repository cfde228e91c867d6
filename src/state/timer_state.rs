//! Timer state structure and management

use super::Mode;

/// Countdown state for a single timer instance
///
/// The remaining time is stored as one integer count of seconds and the
/// displayed minutes/seconds are derived from it, so there is never an
/// inconsistent intermediate state between two independently decremented
/// fields.
#[derive(Debug, Clone)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub mode: Mode,
    pub running: bool,
    /// Identifies which schedule registration a tick belongs to. A tick
    /// whose generation no longer matches must not apply.
    pub(crate) generation: u64,
}

impl TimerState {
    /// Create an idle timer state in work mode with its full duration
    pub fn new() -> Self {
        Self::for_mode(Mode::Work)
    }

    /// Create an idle timer state for the given mode with its full duration
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            remaining_seconds: mode.default_duration_secs(),
            mode,
            running: false,
            generation: 0,
        }
    }

    /// Restore the remaining time to the current mode's full duration
    pub fn reload(&mut self) {
        self.remaining_seconds = self.mode.default_duration_secs();
    }

    /// Switch to a new mode, restoring that mode's full duration
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reload();
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Check if the countdown has reached zero
    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
