//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::Mode;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "take-five")]
#[command(about = "A state-managed countdown timer for Pomodoro-style work and rest intervals")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Interval preset to load on startup
    #[arg(short, long, value_enum, default_value_t = Mode::Work)]
    pub mode: Mode,

    /// Emit timer updates as JSON lines instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_to_work_mode() {
        let config = Config::try_parse_from(["take-five"]).unwrap();
        assert_eq!(config.mode, Mode::Work);
        assert!(!config.json);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn parses_mode_and_flags() {
        let config =
            Config::try_parse_from(["take-five", "--mode", "short-rest", "--json", "-v"]).unwrap();
        assert_eq!(config.mode, Mode::ShortRest);
        assert!(config.json);
        assert_eq!(config.log_level(), "debug");
    }
}
