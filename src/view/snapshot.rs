//! Read-side projection of the timer state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Mode, TimerState};

/// Format a seconds count as zero-padded "MM:SS"
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Snapshot published to the presentation layer after every state change
/// and every tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub formatted_time: String,
    pub mode: Mode,
    pub is_running: bool,
    pub remaining_seconds: u64,
    pub timestamp: DateTime<Utc>,
}

impl TimerSnapshot {
    /// Project a snapshot from the current timer state
    pub fn from_state(state: &TimerState) -> Self {
        Self {
            formatted_time: format_mm_ss(state.remaining_seconds),
            mode: state.mode,
            is_running: state.running,
            remaining_seconds: state.remaining_seconds,
            timestamp: Utc::now(),
        }
    }

    /// One-line rendering for a terminal host
    pub fn status_line(&self) -> String {
        let activity = if self.is_running { "RUNNING" } else { "IDLE" };
        format!("[{}] {} ({})", self.mode.label(), self.formatted_time, activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_zero_pads_both_fields() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(9), "00:09");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(60), "01:00");
        assert_eq!(format_mm_ss(25 * 60), "25:00");
        assert_eq!(format_mm_ss(25 * 60 - 3), "24:57");
    }

    #[test]
    fn snapshot_projects_state() {
        let mut state = TimerState::for_mode(Mode::ShortRest);
        state.remaining_seconds = 299;
        state.running = true;

        let snapshot = TimerSnapshot::from_state(&state);
        assert_eq!(snapshot.formatted_time, "04:59");
        assert_eq!(snapshot.mode, Mode::ShortRest);
        assert!(snapshot.is_running);
        assert_eq!(snapshot.remaining_seconds, 299);
    }

    #[test]
    fn status_line_names_mode_and_activity() {
        let state = TimerState::new();
        let snapshot = TimerSnapshot::from_state(&state);
        assert_eq!(snapshot.status_line(), "[WORK] 25:00 (IDLE)");
    }
}
