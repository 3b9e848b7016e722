//! Background tasks module
//!
//! The screen event loop and the host collaborators that feed it.

pub mod screen_loop;
pub mod start_trigger;

// Re-export main functions
pub use screen_loop::{run_screen, ScreenEvent, ScreenHandle};
pub use start_trigger::start_trigger_task;
