//! Errors raised while building values from text

use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur when parsing textual values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not a recognised time literal
    #[error("Invalid time literal: {input}")]
    InvalidTime { input: String },

    /// Time lies outside the representable range
    #[error("Time out of range: {input}")]
    TimeOutOfRange { input: String },
}

impl ParseError {
    /// Create an invalid time error
    pub fn invalid_time(input: impl Into<String>) -> Self {
        Self::InvalidTime { input: input.into() }
    }
}
