//! Session timing and time sources.

use derive_more::{Display, Error};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Monotonic time source.
///
/// Readings are offsets from an arbitrary, fixed origin; only differences
/// between readings of the same clock are meaningful.
pub trait Clock {
    /// Current reading.
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Starts a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock advanced by hand.
///
/// Clones share one reading, so a test can keep a handle and advance the
/// clock a session is running on.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Sets the reading. Moving backwards is not checked.
    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Elapsed time was requested too early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TimerError {
    /// `start` was never recorded.
    #[display("Timer was never started")]
    NotStarted,
    /// `stop` was never recorded.
    #[display("Timer is still running")]
    NotStopped,
}

/// Measures a session from its first selection to its final match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTimer {
    started_at: Option<Duration>,
    ended_at: Option<Duration>,
}

impl SessionTimer {
    /// Creates an idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start time. Returns false if already started.
    #[instrument(skip(self))]
    pub fn start(&mut self, now: Duration) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        debug!("Session timer started");
        true
    }

    /// Records the end time. Returns false if already stopped.
    #[instrument(skip(self))]
    pub fn stop(&mut self, now: Duration) -> bool {
        if self.ended_at.is_some() {
            return false;
        }
        self.ended_at = Some(now);
        debug!("Session timer stopped");
        true
    }

    /// Start reading, if recorded.
    pub fn started_at(&self) -> Option<Duration> {
        self.started_at
    }

    /// End reading, if recorded.
    pub fn ended_at(&self) -> Option<Duration> {
        self.ended_at
    }

    /// True between start and stop.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    /// Seconds between start and stop, at millisecond resolution.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotStarted`] or [`TimerError::NotStopped`]
    /// when either end is missing.
    pub fn elapsed_seconds(&self) -> Result<f64, TimerError> {
        let started = self.started_at.ok_or(TimerError::NotStarted)?;
        let ended = self.ended_at.ok_or(TimerError::NotStopped)?;
        let millis = ended.saturating_sub(started).as_millis();
        Ok(millis as f64 / 1000.0)
    }
}
