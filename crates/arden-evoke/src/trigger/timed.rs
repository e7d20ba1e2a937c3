//! Time-driven triggers

use crate::context::ExecutionContext;
use crate::schedule::Schedule;
use arden_types::ArdenTime;

/// A trigger that becomes due by polling its schedule
///
/// It never reacts to events and never reports a triggering event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedTrigger {
    schedule: Schedule,
}

impl TimedTrigger {
    pub fn new(schedule: Schedule) -> Self {
        Self { schedule }
    }

    /// Due once at `time`
    pub fn at(time: ArdenTime) -> Self {
        Self::new(Schedule::At(time))
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn next_run_time(&self, context: &dyn ExecutionContext) -> Option<ArdenTime> {
        self.schedule.next_run_time(context.current_time())
    }
}
