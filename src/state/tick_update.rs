//! Per-tick label update record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::format_elapsed;

/// One label update as published by the JSON sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickUpdate {
    pub text: String,
    /// Counter value that `text` renders
    pub elapsed_seconds: u64,
    pub timestamp: DateTime<Utc>,
    /// Set on the record announcing the run reached its target
    #[serde(default)]
    pub finished: bool,
}

impl TickUpdate {
    /// Build an update for a displayed counter value, stamped now
    pub fn new(elapsed_seconds: u64) -> Self {
        Self {
            text: format_elapsed(elapsed_seconds),
            elapsed_seconds,
            timestamp: Utc::now(),
            finished: false,
        }
    }

    /// Build the record announcing the target was reached
    pub fn finished(elapsed_seconds: u64) -> Self {
        Self {
            finished: true,
            ..Self::new(elapsed_seconds)
        }
    }

    /// Recover an update from label text, if it is `MM:SS`
    pub fn from_text(text: &str) -> Option<Self> {
        let (minutes, seconds) = text.split_once(':')?;
        let minutes: u64 = minutes.parse().ok()?;
        let seconds: u64 = seconds.parse().ok()?;
        if seconds >= 60 {
            return None;
        }
        let total = minutes.checked_mul(60)?.checked_add(seconds)?;
        Some(Self::new(total))
    }
}
