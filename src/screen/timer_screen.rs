//! Timer screen controller

use std::time::Duration;
use tracing::{debug, info, warn};

use super::Ticker;
use crate::{
    display::DisplaySink,
    scheduler::{TickHandle, TickQueue},
    state::TimerState,
};

/// Lifecycle phase of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    Active,
    Destroyed,
}

/// Screen binding a start trigger and a label to one ticker.
///
/// Owns its tick queue; nothing here is shared outside the screen.
#[derive(Debug)]
pub struct TimerScreen<D> {
    ticker: Ticker<D>,
    queue: TickQueue,
    phase: ScreenPhase,
}

impl<D: DisplaySink> TimerScreen<D> {
    /// Screen creation hook. The timer starts stopped at zero.
    pub fn create(display: D, interval: Duration) -> Self {
        debug!("Timer screen created");
        Self {
            ticker: Ticker::new(display, interval),
            queue: TickQueue::new(),
            phase: ScreenPhase::Active,
        }
    }

    /// Finish the run by itself once the counter reaches `target` seconds
    pub fn with_target(mut self, target: Option<u64>) -> Self {
        self.ticker = self.ticker.with_target(target);
        self
    }

    pub fn state(&self) -> TimerState {
        self.ticker.state()
    }

    /// Check whether the run ended by reaching its target
    pub fn is_completed(&self) -> bool {
        self.ticker.is_completed()
    }

    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == ScreenPhase::Destroyed
    }

    pub fn display(&self) -> &D {
        self.ticker.display()
    }

    pub fn queue(&self) -> &TickQueue {
        &self.queue
    }

    /// Deadline of the next pending tick on the screen's clock
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.next_deadline()
    }

    /// Start button tap. Returns whether the timer was started.
    pub fn on_start_pressed(&mut self) -> bool {
        if self.is_destroyed() {
            warn!("Start pressed after screen teardown, ignoring");
            return false;
        }
        if self.ticker.state().is_running() {
            debug!("Start pressed while running, ignoring");
            return false;
        }

        info!("Timer started");
        self.ticker.start(&mut self.queue);
        true
    }

    /// Deliver one due tick. Handles other than the pending one are dropped.
    pub fn on_tick(&mut self, handle: TickHandle) {
        if self.ticker.pending() != Some(handle) {
            debug!("Dropping stale tick {}", handle.id());
            return;
        }
        self.ticker.tick(&mut self.queue);
    }

    /// Move the screen's clock to `now` and deliver every tick due by then.
    ///
    /// Ticks fire one at a time at their own deadlines, so a screen that
    /// fell behind catches up tick by tick in order.
    pub fn advance_to(&mut self, now: Duration) {
        while let Some(handle) = self.queue.pop_due(now) {
            self.on_tick(handle);
        }
    }

    /// Teardown hook. Cancels the pending tick; later calls do nothing.
    pub fn destroy(&mut self) -> TimerState {
        if !self.is_destroyed() {
            self.ticker.stop(&mut self.queue);
            self.phase = ScreenPhase::Destroyed;
            info!("Timer screen destroyed at {}", self.state().display_text());
        }
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingLabel;

    const SECOND: Duration = Duration::from_secs(1);

    fn screen() -> TimerScreen<RecordingLabel> {
        TimerScreen::create(RecordingLabel::new(), SECOND)
    }

    #[test]
    fn created_screen_is_stopped() {
        let screen = screen();
        assert_eq!(screen.state(), TimerState::new());
        assert_eq!(screen.phase(), ScreenPhase::Active);
        assert_eq!(screen.next_deadline(), None);
    }

    #[test]
    fn first_tick_shows_zero_immediately() {
        let mut screen = screen();
        assert!(screen.on_start_pressed());

        screen.advance_to(Duration::ZERO);
        assert_eq!(screen.display().texts, vec!["00:00"]);
        assert_eq!(screen.next_deadline(), Some(SECOND));
    }

    #[test]
    fn repeated_taps_are_ignored_while_running() {
        let mut screen = screen();
        assert!(screen.on_start_pressed());
        screen.advance_to(2 * SECOND);
        assert!(!screen.on_start_pressed());
        screen.advance_to(3 * SECOND);

        assert_eq!(screen.display().texts, vec!["00:00", "00:01", "00:02", "00:03"]);
        assert_eq!(screen.state().elapsed_seconds, 4);
        assert_eq!(screen.queue().pending(), 1);
    }

    #[test]
    fn catching_up_delivers_ticks_in_order() {
        let mut screen = screen();
        screen.on_start_pressed();
        screen.advance_to(125 * SECOND);

        assert_eq!(screen.display().texts.len(), 126);
        assert_eq!(screen.display().texts.last().unwrap(), "02:05");
        assert_eq!(screen.state().elapsed_seconds, 126);
    }

    #[test]
    fn start_is_relative_to_the_screen_clock() {
        let mut screen = screen();
        screen.advance_to(10 * SECOND);
        screen.on_start_pressed();
        screen.advance_to(11 * SECOND);

        assert_eq!(screen.display().texts, vec!["00:00", "00:01"]);
        assert_eq!(screen.next_deadline(), Some(12 * SECOND));
    }

    #[test]
    fn zero_interval_still_returns() {
        let mut screen = TimerScreen::create(RecordingLabel::new(), Duration::ZERO);
        screen.on_start_pressed();
        screen.advance_to(Duration::from_millis(5));

        assert_eq!(screen.display().texts.len(), 6);
        assert_eq!(screen.next_deadline(), Some(Duration::from_millis(6)));
    }

    #[test]
    fn target_ends_the_run() {
        let mut screen = screen().with_target(Some(2));
        screen.on_start_pressed();
        screen.advance_to(60 * SECOND);

        assert!(screen.is_completed());
        assert_eq!(screen.display().texts, vec!["00:00", "00:01", "00:02"]);
        assert_eq!(screen.display().finished, Some(2));
        assert_eq!(screen.state(), TimerState { elapsed_seconds: 2, running: false });
        assert_eq!(screen.next_deadline(), None);
    }

    #[test]
    fn destroy_cancels_pending_tick() {
        let mut screen = screen();
        screen.on_start_pressed();
        screen.advance_to(Duration::ZERO);

        let state = screen.destroy();
        screen.advance_to(60 * SECOND);

        assert_eq!(state, TimerState { elapsed_seconds: 1, running: false });
        assert_eq!(screen.display().texts, vec!["00:00"]);
        assert_eq!(screen.queue().pending(), 0);
    }

    #[test]
    fn stale_handle_is_dropped() {
        let mut screen = screen();
        screen.on_start_pressed();
        screen.advance_to(Duration::ZERO);
        let stale = TickHandle::new(0);

        screen.on_tick(stale);
        assert_eq!(screen.display().texts, vec!["00:00"]);
        assert_eq!(screen.state().elapsed_seconds, 1);
    }

    #[test]
    fn screen_is_not_reused_after_destroy() {
        let mut screen = screen();
        screen.destroy();

        assert!(!screen.on_start_pressed());
        assert_eq!(screen.destroy(), TimerState::new());
        assert!(screen.is_destroyed());
    }
}
