//! Arden value domains

use serde::{Deserialize, Serialize};

/// The domain a runtime value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArdenType {
    /// The null marker
    Null,
    /// Three-valued boolean
    Boolean,
    /// Decimal number
    Number,
    /// Character string
    String,
    /// Duration (seconds- or months-based)
    Duration,
    /// Absolute point in time
    Time,
    /// Ordered list
    List,
}

impl ArdenType {
    /// Get the simple name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Duration => "Duration",
            Self::Time => "Time",
            Self::List => "List",
        }
    }

    /// Check if this type is ordered (supports comparison)
    pub const fn is_ordered(&self) -> bool {
        matches!(self, Self::Number | Self::String | Self::Duration | Self::Time)
    }

    /// Check if values of this type can be summed and averaged
    ///
    /// Times are averaged but never summed; see the arithmetic operators.
    pub const fn is_quantitative(&self) -> bool {
        matches!(self, Self::Number | Self::Duration | Self::Time)
    }
}

impl std::fmt::Display for ArdenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
