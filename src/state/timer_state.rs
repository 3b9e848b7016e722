//! Timer state structure and formatting

use serde::{Deserialize, Serialize};

/// Elapsed-time counter state for the timer screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimerState {
    /// Whole seconds counted since the timer was last started
    pub elapsed_seconds: u64,
    pub running: bool,
}

impl TimerState {
    /// Create a stopped timer state at zero
    pub fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Label text for the current counter value
    pub fn display_text(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

/// Format seconds as `MM:SS`. Minutes do not roll over into hours.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
