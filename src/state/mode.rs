//! Interval mode presets and their default durations

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default work interval length in minutes
pub const WORK_MINUTES: u64 = 25;
/// Default short rest length in minutes
pub const SHORT_REST_MINUTES: u64 = 5;
/// Default long rest length in minutes
pub const LONG_REST_MINUTES: u64 = 10;

/// The three preset countdown modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Work,
    ShortRest,
    LongRest,
}

impl Mode {
    /// Get the default duration of this mode in seconds
    pub fn default_duration_secs(&self) -> u64 {
        let minutes = match self {
            Mode::Work => WORK_MINUTES,
            Mode::ShortRest => SHORT_REST_MINUTES,
            Mode::LongRest => LONG_REST_MINUTES,
        };
        minutes * 60
    }

    /// Get the label used in the presentation contract
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "WORK",
            Mode::ShortRest => "SHORT_REST",
            Mode::LongRest => "LONG_REST",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Work
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations_match_presets() {
        assert_eq!(Mode::Work.default_duration_secs(), 25 * 60);
        assert_eq!(Mode::ShortRest.default_duration_secs(), 5 * 60);
        assert_eq!(Mode::LongRest.default_duration_secs(), 10 * 60);
    }

    #[test]
    fn default_mode_is_work() {
        assert_eq!(Mode::default(), Mode::Work);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(Mode::Work.label(), "WORK");
        assert_eq!(Mode::ShortRest.label(), "SHORT_REST");
        assert_eq!(Mode::LongRest.label(), "LONG_REST");
    }

    #[test]
    fn mode_serializes_with_contract_labels() {
        let json = serde_json::to_string(&Mode::ShortRest).unwrap();
        assert_eq!(json, "\"SHORT_REST\"");
    }
}
