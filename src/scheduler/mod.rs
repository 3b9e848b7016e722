//! Tick scheduling module
//!
//! Schedule-after-delay and cancel-pending primitives the ticker runs on.

pub mod tick_queue;

use std::time::Duration;

// Re-export main types
pub use tick_queue::TickQueue;

/// Opaque handle to one pending scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(u64);

impl TickHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw id, unique per scheduler
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Something a tick can be scheduled on and cancelled from
pub trait Scheduler {
    /// Schedule a tick to fire after `delay`
    fn schedule(&mut self, delay: Duration) -> TickHandle;

    /// Remove a pending tick. Returns false if it already fired or was cancelled.
    fn cancel(&mut self, handle: TickHandle) -> bool;
}
