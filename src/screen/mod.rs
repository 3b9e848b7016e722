//! Timer screen module
//!
//! The elapsed-time ticker and the screen controller that drives it.

pub mod ticker;
pub mod timer_screen;

// Re-export main types
pub use ticker::{Ticker, MIN_TICK_INTERVAL};
pub use timer_screen::{ScreenPhase, TimerScreen};
