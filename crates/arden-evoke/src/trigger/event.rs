//! Event-driven triggers

use crate::error::{EvokeError, EvokeResult};
use crate::event::ArdenEvent;
use arden_types::ArdenDuration;
use log::trace;
use std::collections::VecDeque;

/// A trigger that fires on events of one category
///
/// Matching events queue up in delivery order until taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTrigger {
    category: String,
    delay: ArdenDuration,
    pending: VecDeque<ArdenEvent>,
}

impl EventTrigger {
    /// Fire on `category` without delay
    pub fn on(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            delay: ArdenDuration::ZERO,
            pending: VecDeque::new(),
        }
    }

    /// Fire on `category`, invoking `delay` after the event
    pub fn with_delay(category: impl Into<String>, delay: ArdenDuration) -> EvokeResult<Self> {
        if delay.is_negative() {
            return Err(EvokeError::NegativeDelay { delay });
        }
        Ok(Self {
            delay,
            ..Self::on(category)
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn delay(&self) -> ArdenDuration {
        self.delay
    }

    /// Number of matching events not yet taken
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    pub fn fires_on(&self, event: &ArdenEvent) -> bool {
        event.category() == self.category
    }

    /// Queue `event` if it matches this trigger's category
    pub fn deliver(&mut self, event: &ArdenEvent) {
        if self.fires_on(event) {
            trace!("event trigger '{}' queued {}", self.category, event);
            self.pending.push_back(event.clone());
        }
    }

    /// Dequeue the oldest pending event
    pub fn take_triggering_event(&mut self) -> Option<ArdenEvent> {
        self.pending.pop_front()
    }

    pub fn pending_delay(&self) -> ArdenDuration {
        self.delay
    }
}
