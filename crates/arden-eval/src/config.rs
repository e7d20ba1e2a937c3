//! Engine configuration

use crate::error::{EvalError, EvalResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arden Syntax language versions, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArdenVersion {
    #[serde(rename = "1")]
    V1,
    #[serde(rename = "2")]
    V2,
    #[serde(rename = "2.1")]
    V2_1,
    #[serde(rename = "2.5")]
    V2_5,
    #[serde(rename = "2.6")]
    V2_6,
    #[serde(rename = "2.7")]
    V2_7,
    #[serde(rename = "2.8")]
    V2_8,
    #[serde(rename = "2.9")]
    V2_9,
    #[serde(rename = "2.10")]
    V2_10,
}

impl ArdenVersion {
    /// The newest supported version
    pub const LATEST: Self = Self::V2_10;

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2 => "2",
            Self::V2_1 => "2.1",
            Self::V2_5 => "2.5",
            Self::V2_6 => "2.6",
            Self::V2_7 => "2.7",
            Self::V2_8 => "2.8",
            Self::V2_9 => "2.9",
            Self::V2_10 => "2.10",
        }
    }
}

impl Default for ArdenVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for ArdenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArdenVersion {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed
            .strip_prefix("version")
            .map(str::trim)
            .unwrap_or(trimmed);
        [
            Self::V1,
            Self::V2,
            Self::V2_1,
            Self::V2_5,
            Self::V2_6,
            Self::V2_7,
            Self::V2_8,
            Self::V2_9,
            Self::V2_10,
        ]
        .into_iter()
        .find(|v| v.as_str() == trimmed)
        .ok_or_else(|| EvalError::Config {
            message: format!("unknown Arden version '{}'", s),
        })
    }
}

/// Configuration for [`crate::ArdenEngine`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Language version the engine evaluates for
    pub version: ArdenVersion,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language version
    pub fn with_version(mut self, version: ArdenVersion) -> Self {
        self.version = version;
        self
    }

    /// Load configuration from a JSON document
    pub fn from_json(json: &str) -> EvalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
