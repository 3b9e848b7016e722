//! Elapsed-time ticker state machine

use std::time::Duration;
use tracing::{debug, info, trace};

use crate::{
    display::DisplaySink,
    scheduler::{Scheduler, TickHandle},
    state::{format_elapsed, TimerState},
};

/// Shortest interval a ticker runs at; a zero interval would never yield
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Counts whole ticks while running and pushes `MM:SS` to a display sink.
///
/// The ticker never owns a clock. Each tick reschedules the next one on the
/// scheduler it is handed, and `stop` cancels whatever is still pending.
/// With a target the chain ends on the tick that shows it.
#[derive(Debug)]
pub struct Ticker<D> {
    state: TimerState,
    interval: Duration,
    target: Option<u64>,
    completed: bool,
    pending: Option<TickHandle>,
    display: D,
}

impl<D: DisplaySink> Ticker<D> {
    /// Create a stopped ticker at zero. Intervals below [`MIN_TICK_INTERVAL`] are raised to it.
    pub fn new(display: D, interval: Duration) -> Self {
        Self {
            state: TimerState::new(),
            interval: interval.max(MIN_TICK_INTERVAL),
            target: None,
            completed: false,
            pending: None,
            display,
        }
    }

    /// Stop by itself once the counter reaches `target` seconds
    pub fn with_target(mut self, target: Option<u64>) -> Self {
        self.target = target;
        self
    }

    pub fn target(&self) -> Option<u64> {
        self.target
    }

    /// Check whether the last run ended by reaching its target
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Handle of the tick currently scheduled, if any
    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Reset the counter and schedule the first tick immediately
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S) {
        // A second chain must never exist alongside the first.
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }

        self.state.elapsed_seconds = 0;
        self.state.running = true;
        self.completed = false;
        self.pending = Some(scheduler.schedule(Duration::ZERO));
        debug!("Ticker started with interval {:?}", self.interval);
    }

    /// Display the current value, count it and schedule the next tick.
    ///
    /// A tick delivered while stopped ends the chain without rescheduling.
    /// The tick showing the target completes the run; the counter stays at
    /// the target.
    pub fn tick<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.pending = None;

        if !self.state.running {
            trace!("Tick after stop ignored");
            return;
        }

        let shown = self.state.elapsed_seconds;
        self.display.show_elapsed(shown);

        if self.target.is_some_and(|target| shown >= target) {
            self.state.running = false;
            self.completed = true;
            self.display.finished(shown);
            info!("Target reached at {}", format_elapsed(shown));
            return;
        }

        self.state.elapsed_seconds += 1;
        self.pending = Some(scheduler.schedule(self.interval));
    }

    /// Cancel the pending tick and stop counting. The counter keeps its value.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }

        if self.state.running {
            debug!("Ticker stopped at {}", format_elapsed(self.state.elapsed_seconds));
        }
        self.state.running = false;
    }
}
