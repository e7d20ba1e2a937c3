//! Execution context consumed by triggers

use arden_types::ArdenTime;
use chrono::Local;

/// Environment a trigger is evaluated in
///
/// Supplied by the scheduler that owns the module instances.
pub trait ExecutionContext {
    /// The current time reference
    fn current_time(&self) -> ArdenTime;
}

/// A clock that always reports the same time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: ArdenTime,
}

impl FixedClock {
    pub fn new(now: ArdenTime) -> Self {
        Self { now }
    }

    /// Move the clock to `now`
    pub fn set(&mut self, now: ArdenTime) {
        self.now = now;
    }
}

impl ExecutionContext for FixedClock {
    fn current_time(&self) -> ArdenTime {
        self.now
    }
}

/// The local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ExecutionContext for SystemClock {
    fn current_time(&self) -> ArdenTime {
        ArdenTime::new(Local::now().naive_local())
    }
}
