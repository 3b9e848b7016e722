//! Sobriety Timer - a single-screen elapsed-time counter
//!
//! A start tap resets the counter and schedules an immediate tick. Each tick
//! shows the counter as `MM:SS`, counts one second and schedules the next.
//! Teardown cancels the pending tick.

pub mod config;
pub mod display;
pub mod scheduler;
pub mod screen;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use display::DisplaySink;
pub use screen::{Ticker, TimerScreen};
pub use state::{format_elapsed, TimerState};
pub use tasks::{run_screen, ScreenHandle};
pub use utils::signals::shutdown_signal;
