//! Composite "any of" triggers

use crate::context::ExecutionContext;
use crate::event::ArdenEvent;
use crate::trigger::Trigger;
use arden_types::{ArdenDuration, ArdenTime};
use log::trace;

/// A trigger that is due when any of its children is
///
/// After [`take_triggering_event`](Self::take_triggering_event) returns an
/// event, the child that produced it is the active child and answers
/// [`pending_delay`](Self::pending_delay).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyTrigger {
    children: Vec<Trigger>,
    active: Option<usize>,
}

impl AnyTrigger {
    pub fn new(children: impl IntoIterator<Item = Trigger>) -> Self {
        Self {
            children: children.into_iter().collect(),
            active: None,
        }
    }

    pub fn children(&self) -> &[Trigger] {
        &self.children
    }

    /// Position of the active child, if any
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Earliest next run time among the children that have one
    pub fn next_run_time(&self, context: &dyn ExecutionContext) -> Option<ArdenTime> {
        self.children
            .iter()
            .filter_map(|child| child.next_run_time(context))
            .min()
    }

    pub fn fires_on(&self, event: &ArdenEvent) -> bool {
        self.children.iter().any(|child| child.fires_on(event))
    }

    /// Hand `event` to every child, matching or not
    pub fn deliver(&mut self, event: &ArdenEvent) {
        for child in &mut self.children {
            child.deliver(event);
        }
    }

    /// The first child event in declaration order
    ///
    /// The producing child becomes active. When no child has an event, the
    /// active child stays as it was.
    pub fn take_triggering_event(&mut self) -> Option<ArdenEvent> {
        for (i, child) in self.children.iter_mut().enumerate() {
            if let Some(event) = child.take_triggering_event() {
                trace!("any trigger: child {} active for {}", i, event);
                self.active = Some(i);
                return Some(event);
            }
        }
        None
    }

    /// Delay of the active child; zero before any event was taken
    pub fn pending_delay(&self) -> ArdenDuration {
        self.active
            .and_then(|i| self.children.get(i))
            .map_or(ArdenDuration::ZERO, Trigger::pending_delay)
    }
}
