//! Trigger construction errors

use arden_types::ArdenDuration;
use thiserror::Error;

/// Result type for trigger construction
pub type EvokeResult<T> = Result<T, EvokeError>;

/// Errors raised while building triggers
///
/// Once built, a trigger never fails: it either fires or it does not.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvokeError {
    /// Cyclic schedule whose interval does not advance time
    #[error("Invalid schedule: interval must be positive, got {interval}")]
    NonPositiveInterval { interval: ArdenDuration },

    /// Cyclic schedule with a negative total length
    #[error("Invalid schedule: length must not be negative, got {length}")]
    NegativeLength { length: ArdenDuration },

    /// Event trigger with a negative delay
    #[error("Invalid delay: {delay} is negative")]
    NegativeDelay { delay: ArdenDuration },

    /// Start time plus length is not representable
    #[error("Invalid schedule: {message}")]
    InvalidSchedule { message: String },
}

impl EvokeError {
    /// Create an invalid schedule error
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            message: message.into(),
        }
    }
}
