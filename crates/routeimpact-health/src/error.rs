//! Error types for the health engine.
//!
//! Scoring never fails; these cover configuration loading. Snapshot errors
//! from `routeimpact-core` convert through `From`, so callers that parse
//! and score in one function can use `?` on both.

use routeimpact_core::CoreError;
use thiserror::Error;

/// Result type for health engine operations.
pub type HealthEngineResult<T> = Result<T, HealthError>;

/// Errors that can occur around health calculations.
#[derive(Error, Debug, Clone)]
pub enum HealthError {
    /// A configuration value is out of range.
    #[error("Invalid config field '{field}': {reason}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration text could not be parsed.
    #[error("Failed to parse config: {message}")]
    ConfigParse {
        /// The parser message.
        message: String,
    },

    /// Snapshot error from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl HealthError {
    /// Create an invalid config error.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for HealthError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse {
            message: err.to_string(),
        }
    }
}
