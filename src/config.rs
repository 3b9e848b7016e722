//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::screen::MIN_TICK_INTERVAL;

/// One tick per second at normal speed
pub const BASE_INTERVAL: Duration = Duration::from_secs(1);

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "sobriety-timer")]
#[command(about = "An elapsed-time counter started with a single tap")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Start the timer without waiting for Enter
    #[arg(short, long)]
    pub autostart: bool,

    /// Time acceleration factor; one tick every 1s / speed
    #[arg(short, long, default_value = "1.0")]
    pub speed: f64,

    /// Explicit tick interval in milliseconds (overrides --speed)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Tear the screen down after this many seconds
    #[arg(long)]
    pub run_for: Option<u64>,

    /// Goal in counted seconds; the timer finishes once it shows this value
    #[arg(short, long)]
    pub target: Option<u64>,

    /// Print JSON lines instead of the plain MM:SS label
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autostart: false,
            speed: 1.0,
            interval_ms: None,
            run_for: None,
            target: None,
            json: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Reject settings that would make the ticker spin or run backwards
    pub fn validate(&self) -> Result<(), String> {
        if self.interval_ms == Some(0) {
            return Err("--interval-ms must be greater than zero".to_string());
        }
        if self.interval_ms.is_none() && (!self.speed.is_finite() || self.speed < 1.0) {
            return Err(format!("--speed must be at least 1, got {}", self.speed));
        }

        let interval = self.tick_interval();
        if interval < MIN_TICK_INTERVAL {
            return Err(format!(
                "Tick interval {:?} is below the {:?} minimum, lower --speed",
                interval, MIN_TICK_INTERVAL
            ));
        }
        Ok(())
    }

    /// Interval between two ticks
    pub fn tick_interval(&self) -> Duration {
        match self.interval_ms {
            Some(ms) => Duration::from_millis(ms),
            None => BASE_INTERVAL.div_f64(self.speed),
        }
    }

    /// Teardown deadline, if one was requested
    pub fn run_for(&self) -> Option<Duration> {
        self.run_for.map(Duration::from_secs)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
