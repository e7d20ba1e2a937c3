//! Triggers decide when a module instance becomes eligible to run
//!
//! Three variants cover everything a module's evoke slot can declare:
//! - [`TimedTrigger`]: due by schedule, polled through `next_run_time`
//! - [`EventTrigger`]: fires when an event of its category is delivered
//! - [`AnyTrigger`]: due whenever any of its children is
//!
//! A trigger tree belongs to exactly one module instance and must be
//! driven by one scheduling cycle at a time.

mod any;
mod event;
mod timed;

pub use any::AnyTrigger;
pub use event::EventTrigger;
pub use timed::TimedTrigger;

use crate::context::ExecutionContext;
use crate::event::ArdenEvent;
use crate::schedule::Schedule;
use arden_types::{ArdenDuration, ArdenTime};

/// An event that made a trigger fire, with the delay to wait before
/// invoking the module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triggering {
    pub event: ArdenEvent,
    pub delay: ArdenDuration,
}

impl Triggering {
    /// When the module should run: the event time plus the delay
    pub fn run_at(&self) -> Option<ArdenTime> {
        self.event.time().add_duration(&self.delay)
    }
}

/// A module instance's trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Timed(TimedTrigger),
    Event(EventTrigger),
    Any(AnyTrigger),
}

impl Trigger {
    /// A time-driven trigger following `schedule`
    pub fn timed(schedule: Schedule) -> Self {
        Self::Timed(TimedTrigger::new(schedule))
    }

    /// An event-driven trigger without delay
    pub fn event(category: impl Into<String>) -> Self {
        Self::Event(EventTrigger::on(category))
    }

    /// A composite of `children`
    pub fn any(children: impl IntoIterator<Item = Trigger>) -> Self {
        Self::Any(AnyTrigger::new(children))
    }

    /// Next time the module is due by polling alone
    ///
    /// Event triggers are never due by polling.
    pub fn next_run_time(&self, context: &dyn ExecutionContext) -> Option<ArdenTime> {
        match self {
            Self::Timed(t) => t.next_run_time(context),
            Self::Event(_) => None,
            Self::Any(t) => t.next_run_time(context),
        }
    }

    /// Whether `event` satisfies this trigger
    pub fn fires_on(&self, event: &ArdenEvent) -> bool {
        match self {
            Self::Timed(_) => false,
            Self::Event(t) => t.fires_on(event),
            Self::Any(t) => t.fires_on(event),
        }
    }

    /// Record `event` for later retrieval
    pub fn deliver(&mut self, event: &ArdenEvent) {
        match self {
            Self::Timed(_) => {}
            Self::Event(t) => t.deliver(event),
            Self::Any(t) => t.deliver(event),
        }
    }

    /// Take the event that made this trigger fire, if any
    ///
    /// For composites this selects the child that
    /// [`pending_delay`](Self::pending_delay) reports on.
    pub fn take_triggering_event(&mut self) -> Option<ArdenEvent> {
        match self {
            Self::Timed(_) => None,
            Self::Event(t) => t.take_triggering_event(),
            Self::Any(t) => t.take_triggering_event(),
        }
    }

    /// Delay between the last taken event and the invocation
    ///
    /// Only meaningful after [`take_triggering_event`](Self::take_triggering_event)
    /// returned an event. Zero otherwise.
    pub fn pending_delay(&self) -> ArdenDuration {
        match self {
            Self::Timed(_) => ArdenDuration::ZERO,
            Self::Event(t) => t.pending_delay(),
            Self::Any(t) => t.pending_delay(),
        }
    }

    /// Take the triggering event together with its delay
    pub fn take_triggering(&mut self) -> Option<Triggering> {
        let event = self.take_triggering_event()?;
        Some(Triggering {
            event,
            delay: self.pending_delay(),
        })
    }
}

impl From<TimedTrigger> for Trigger {
    fn from(trigger: TimedTrigger) -> Self {
        Self::Timed(trigger)
    }
}

impl From<EventTrigger> for Trigger {
    fn from(trigger: EventTrigger) -> Self {
        Self::Event(trigger)
    }
}

impl From<AnyTrigger> for Trigger {
    fn from(trigger: AnyTrigger) -> Self {
        Self::Any(trigger)
    }
}
