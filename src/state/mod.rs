//! State module
//!
//! Plain data carried by the timer screen and its display sinks.

pub mod tick_update;
pub mod timer_state;

// Re-export main types
pub use tick_update::TickUpdate;
pub use timer_state::{format_elapsed, TimerState};
