//! Screen event loop task

use tokio::{
    sync::mpsc,
    time::{sleep_until, Instant},
};
use tracing::{debug, info};

use crate::{display::DisplaySink, screen::TimerScreen};

/// Host events delivered to the screen loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Start button tap
    StartPressed,
    /// Screen teardown
    Destroy,
}

/// Sender side of the screen loop, one per host collaborator
#[derive(Debug, Clone)]
pub struct ScreenHandle {
    tx: mpsc::UnboundedSender<ScreenEvent>,
}

impl ScreenHandle {
    /// Create a handle and the receiver the loop consumes
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ScreenEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Deliver a start button tap
    pub fn press_start(&self) -> Result<(), String> {
        self.send(ScreenEvent::StartPressed)
    }

    /// Ask the loop to tear the screen down
    pub fn destroy(&self) -> Result<(), String> {
        self.send(ScreenEvent::Destroy)
    }

    /// Check whether the loop has already exited
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn send(&self, event: ScreenEvent) -> Result<(), String> {
        self.tx
            .send(event)
            .map_err(|e| format!("Screen loop is gone, dropped {:?}", e.0))
    }
}

/// Drive a screen on the current task until it is destroyed.
///
/// Host events and due ticks are handled one at a time, so the screen is
/// never touched concurrently. The loop ends on [`ScreenEvent::Destroy`],
/// when every [`ScreenHandle`] is dropped, or when the run reaches its
/// target, and returns the destroyed screen.
pub async fn run_screen<D: DisplaySink>(
    mut screen: TimerScreen<D>,
    mut events: mpsc::UnboundedReceiver<ScreenEvent>,
) -> TimerScreen<D> {
    info!("Starting screen loop");

    let origin = Instant::now();

    loop {
        if screen.is_completed() {
            info!("Run reached its target at {}", screen.state().display_text());
            break;
        }

        let deadline = screen.next_deadline().map(|offset| origin + offset);

        tokio::select! {
            event = events.recv() => {
                // Bring the clock up to date so a start is relative to now.
                screen.advance_to(origin.elapsed());

                match event {
                    Some(ScreenEvent::StartPressed) => {
                        screen.on_start_pressed();
                        screen.advance_to(origin.elapsed());
                    }
                    Some(ScreenEvent::Destroy) => {
                        debug!("Destroy requested");
                        break;
                    }
                    None => {
                        debug!("All screen handles dropped");
                        break;
                    }
                }
            }

            _ = sleep_until(deadline.unwrap_or(origin)), if deadline.is_some() => {
                screen.advance_to(origin.elapsed());
            }
        }
    }

    screen.destroy();
    info!("Screen loop finished");
    screen
}
