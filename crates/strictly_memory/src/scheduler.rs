//! Cooperative deferred-action queue.
//!
//! Nothing runs on its own: the owner reads the clock and drains due tasks
//! between events, which keeps every transition on one thread and in a
//! total order.

use crate::DeferredAction;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, instrument};

/// A deferred action and the clock reading it becomes due at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Clock reading at which the action runs.
    pub due: Duration,
    /// The action.
    pub action: DeferredAction,
    seq: u64,
}

/// Deferred actions ordered by due time, then by scheduling order.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    tasks: VecDeque<ScheduledTask>,
    next_seq: u64,
}

impl TaskQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to run `delay` after `now`.
    #[instrument(skip(self), fields(pending = self.tasks.len()))]
    pub fn schedule(&mut self, now: Duration, delay: Duration, action: DeferredAction) {
        let task = ScheduledTask {
            due: now + delay,
            action,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let at = self
            .tasks
            .partition_point(|queued| (queued.due, queued.seq) <= (task.due, task.seq));
        self.tasks.insert(at, task);
        debug!(due_ms = task.due.as_millis() as u64, "Deferred action scheduled");
    }

    /// Removes and returns every action due at or before `now`, in order.
    pub fn drain_due(&mut self, now: Duration) -> Vec<DeferredAction> {
        let ready = self.tasks.partition_point(|task| task.due <= now);
        self.tasks.drain(..ready).map(|task| task.action).collect()
    }

    /// Due time of the earliest pending action.
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.front().map(|task| task.due)
    }

    /// Pending tasks in run order.
    pub fn pending(&self) -> impl Iterator<Item = &ScheduledTask> {
        self.tasks.iter()
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
