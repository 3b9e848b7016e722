//! Display sink implementations

use std::io::{self, Write};
use tokio::sync::watch;
use tracing::{debug, warn};

use super::DisplaySink;
use crate::state::{format_elapsed, TickUpdate};

/// Plain label writing one `MM:SS` line per update
pub struct TerminalLabel<W: Write = io::Stdout> {
    out: W,
}

impl TerminalLabel {
    /// Label on stdout
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalLabel<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalLabel<W> {
    fn set_text(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("Failed to write timer label: {}", e);
        }
    }

    fn finished(&mut self, elapsed_seconds: u64) {
        self.set_text(&format!("Target reached: {}", format_elapsed(elapsed_seconds)));
    }
}

/// Label writing one JSON [`TickUpdate`] per line
pub struct JsonLabel<W: Write = io::Stdout> {
    out: W,
}

impl JsonLabel {
    /// JSON lines on stdout
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> JsonLabel<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_update(&mut self, update: &TickUpdate) {
        let result = serde_json::to_writer(&mut self.out, update)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());

        if let Err(e) = result {
            warn!("Failed to write timer update: {}", e);
        }
    }
}

impl<W: Write> DisplaySink for JsonLabel<W> {
    fn set_text(&mut self, text: &str) {
        match TickUpdate::from_text(text) {
            Some(update) => self.write_update(&update),
            None => warn!("Dropping label text that is not MM:SS: {:?}", text),
        }
    }

    fn show_elapsed(&mut self, elapsed_seconds: u64) {
        self.write_update(&TickUpdate::new(elapsed_seconds));
    }

    fn finished(&mut self, elapsed_seconds: u64) {
        self.write_update(&TickUpdate::finished(elapsed_seconds));
    }
}

/// Label published through a watch channel so other tasks can observe it
pub struct WatchLabel {
    tx: watch::Sender<String>,
}

impl WatchLabel {
    /// Create the label and a receiver starting at an empty text
    pub fn new() -> (Self, watch::Receiver<String>) {
        let (tx, rx) = watch::channel(String::new());
        (Self { tx }, rx)
    }

    /// Another receiver for the current label
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl DisplaySink for WatchLabel {
    fn set_text(&mut self, text: &str) {
        // send_replace keeps the value even with no receivers attached
        self.tx.send_replace(text.to_string());
        debug!("Label updated: {}", text);
    }
}

/// Label that keeps every text it was given
#[derive(Debug, Default, Clone)]
pub struct RecordingLabel {
    pub texts: Vec<String>,
    /// Counter value of the finish notice, if one arrived
    pub finished: Option<u64>,
}

impl RecordingLabel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for RecordingLabel {
    fn set_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn finished(&mut self, elapsed_seconds: u64) {
        self.finished = Some(elapsed_seconds);
    }
}
