//! Single-threaded tick queue with a virtual monotonic clock

use std::{
    collections::{BTreeMap, HashMap},
    time::Duration,
};
use tracing::trace;

use super::{Scheduler, TickHandle};

/// Pending ticks ordered by deadline, then by scheduling order.
///
/// Time is an offset from the queue's origin and only moves forward through
/// [`TickQueue::advance_to`]. The owner maps that offset to a real clock.
#[derive(Debug, Default)]
pub struct TickQueue {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, u64), TickHandle>,
    deadlines: HashMap<TickHandle, Duration>,
}

impl TickQueue {
    /// Create an empty queue at offset zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset of the queue's clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of ticks still pending
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Check whether a handle is still pending
    pub fn is_pending(&self, handle: TickHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Deadline of the earliest pending tick
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest tick due at or before `now`.
    ///
    /// The clock steps to that tick's deadline, so a tick scheduled while
    /// handling it is relative to when it was due. With nothing due the
    /// clock moves to `now`. Moving backwards is ignored.
    pub fn pop_due(&mut self, now: Duration) -> Option<TickHandle> {
        let entry = match self.pending.first_entry() {
            Some(entry) if entry.key().0 <= now => entry,
            _ => {
                if now > self.now {
                    self.now = now;
                }
                return None;
            }
        };

        let deadline = entry.key().0;
        let handle = entry.remove();
        self.deadlines.remove(&handle);
        if deadline > self.now {
            self.now = deadline;
        }
        trace!("Tick {} due at {:?}", handle.id(), deadline);
        Some(handle)
    }

    /// Move the clock to `now` and pop every tick already due by then
    pub fn advance_to(&mut self, now: Duration) -> Vec<TickHandle> {
        let mut due = Vec::new();
        while let Some(handle) = self.pop_due(now) {
            due.push(handle);
        }
        due
    }
}

impl Scheduler for TickQueue {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        let id = self.next_id;
        self.next_id += 1;

        let handle = TickHandle::new(id);
        let deadline = self.now + delay;
        self.pending.insert((deadline, id), handle);
        self.deadlines.insert(handle, deadline);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => {
                self.pending.remove(&(deadline, handle.id()));
                true
            }
            None => false,
        }
    }
}
