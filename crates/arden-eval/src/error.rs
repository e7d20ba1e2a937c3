//! Evaluation errors for the Arden engine
//!
//! Data-shape irregularities never show up here: operators resolve them to
//! the null value. These errors describe constructs that a correct front end
//! would have rejected before evaluation.

use crate::config::ArdenVersion;
use crate::registry::Qualifier;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during Arden evaluation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Qualifier does not agree in number with the aggregator
    #[error("{operator} takes {expected}, found {found}")]
    QualifierMismatch {
        operator: String,
        expected: Qualifier,
        found: Qualifier,
    },

    /// Aggregator accepts no qualifier at all
    #[error("{operator} does not accept the {qualifier} qualifier")]
    QualifierNotAccepted { operator: String, qualifier: Qualifier },

    /// INDEX applied to an aggregator that has no selectable position
    #[error("INDEX cannot be applied to {operator}")]
    IndexNotAllowed { operator: String },

    /// USING applied to an aggregator without an ordering key
    #[error("USING cannot be applied to {operator}")]
    UsingNotAllowed { operator: String },

    /// Construct introduced in a later language version
    #[error("{construct} requires Arden {required}, engine is configured for {configured}")]
    UnsupportedInVersion {
        construct: String,
        required: ArdenVersion,
        configured: ArdenVersion,
    },

    /// Operator keyword not known to the registry
    #[error("Unknown operator: {name}")]
    UnknownOperator { name: String },

    /// Invalid engine configuration
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Internal error (should not happen)
    #[error("Internal evaluation error: {message}")]
    Internal { message: String },
}

impl EvalError {
    /// Create a qualifier mismatch error
    pub fn qualifier_mismatch(operator: impl Into<String>, expected: Qualifier, found: Qualifier) -> Self {
        Self::QualifierMismatch {
            operator: operator.into(),
            expected,
            found,
        }
    }

    /// Create an index-not-allowed error
    pub fn index_not_allowed(operator: impl Into<String>) -> Self {
        Self::IndexNotAllowed {
            operator: operator.into(),
        }
    }

    /// Create a version error
    pub fn unsupported_in_version(
        construct: impl Into<String>,
        required: ArdenVersion,
        configured: ArdenVersion,
    ) -> Self {
        Self::UnsupportedInVersion {
            construct: construct.into(),
            required,
            configured,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for errors a front end is expected to report as invalid source
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::QualifierMismatch { .. }
                | Self::QualifierNotAccepted { .. }
                | Self::IndexNotAllowed { .. }
                | Self::UsingNotAllowed { .. }
                | Self::UnsupportedInVersion { .. }
                | Self::UnknownOperator { .. }
        )
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
