//! Display sink module
//!
//! The label the timer screen pushes `MM:SS` text to on every tick.

pub mod sinks;

use crate::state::format_elapsed;

// Re-export main types
pub use sinks::{JsonLabel, RecordingLabel, TerminalLabel, WatchLabel};

/// A text label that receives the formatted elapsed time
pub trait DisplaySink {
    fn set_text(&mut self, text: &str);

    /// Show a counter value. Sinks that keep the raw number override this.
    fn show_elapsed(&mut self, elapsed_seconds: u64) {
        self.set_text(&format_elapsed(elapsed_seconds));
    }

    /// The run reached its target and stopped at `elapsed_seconds`
    fn finished(&mut self, _elapsed_seconds: u64) {}
}

impl<D: DisplaySink + ?Sized> DisplaySink for Box<D> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }

    fn show_elapsed(&mut self, elapsed_seconds: u64) {
        (**self).show_elapsed(elapsed_seconds)
    }

    fn finished(&mut self, elapsed_seconds: u64) {
        (**self).finished(elapsed_seconds)
    }
}
