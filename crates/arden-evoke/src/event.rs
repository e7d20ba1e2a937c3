//! Events that evoke modules

use arden_types::ArdenTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An external event: a category (the event's mapping key) and the time it
/// occurred
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArdenEvent {
    category: String,
    time: ArdenTime,
}

impl ArdenEvent {
    pub fn new(category: impl Into<String>, time: ArdenTime) -> Self {
        Self {
            category: category.into(),
            time,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// When the event occurred
    pub fn time(&self) -> ArdenTime {
        self.time
    }
}

impl fmt::Display for ArdenEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.category, self.time)
    }
}
