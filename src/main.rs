//! Take Five - A state-managed countdown timer for Pomodoro-style intervals
//!
//! This is the terminal host embedding the countdown timer component. It is
//! a stand-in presentation layer: it renders every published snapshot and
//! forwards line commands from stdin to the component.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use take_five::{
    config::Config,
    state::Mode,
    timer::CountdownTimer,
    utils::shutdown_signal,
};

/// Control commands accepted on stdin
enum HostCommand {
    Start,
    Pause,
    Reset,
    SelectMode(Mode),
    Status,
    Quit,
}

impl HostCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "pause" => Some(Self::Pause),
            "reset" => Some(Self::Reset),
            "work" => Some(Self::SelectMode(Mode::Work)),
            "short" => Some(Self::SelectMode(Mode::ShortRest)),
            "long" => Some(Self::SelectMode(Mode::LongRest)),
            "status" => Some(Self::Status),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Apply one input line to the timer; returns false when the host should exit
fn dispatch(timer: &CountdownTimer, line: &str) -> bool {
    let Some(command) = HostCommand::parse(line) else {
        if !line.is_empty() {
            warn!(
                "Unknown command: {} (try start, pause, reset, work, short, long, status, quit)",
                line
            );
        }
        return true;
    };

    let result = match command {
        HostCommand::Start => timer.start().map(|_| ()),
        HostCommand::Pause => timer.pause().map(|_| ()),
        HostCommand::Reset => timer.reset().map(|_| ()),
        HostCommand::SelectMode(mode) => timer.select_mode(mode).map(|_| ()),
        HostCommand::Status => timer.snapshot().map(|snapshot| {
            println!("{}", snapshot.status_line());
            if let (Some(command), Some(time)) = timer.last_command() {
                println!("Last command: {} at {}", command, time.format("%H:%M:%S"));
            }
        }),
        HostCommand::Quit => return false,
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
    }
    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("take_five={}", config.log_level()))
        .init();

    info!("Starting take-five v0.1.0");
    info!(
        "Configuration: mode={}, json={}",
        config.mode.label(),
        config.json
    );

    let timer = Arc::new(CountdownTimer::new(config.mode));

    // Render every snapshot the component publishes
    let mut updates = timer.subscribe();
    let json = config.json;
    let render = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            if json {
                match serde_json::to_string(&snapshot) {
                    Ok(line) => println!("{}", line),
                    Err(e) => error!("Failed to encode snapshot: {}", e),
                }
            } else {
                println!("{}", snapshot.status_line());
            }
        }
    });

    info!("Commands:");
    info!("  start  - start or resume the countdown");
    info!("  pause  - pause, keeping the remaining time");
    info!("  reset  - restore the current mode's full duration");
    info!("  work | short | long - switch interval preset");
    info!("  status - print the current state");
    info!("  quit   - exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if !dispatch(&timer, line.trim()) {
                        break;
                    }
                }
                Ok(None) => {
                    info!("Input closed");
                    break;
                }
                Err(e) => {
                    error!("Failed to read command: {}", e);
                    break;
                }
            },
            _ = &mut shutdown => break,
        }
    }

    render.abort();
    info!("Timer shutdown complete");
    Ok(())
}
