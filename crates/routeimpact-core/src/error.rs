//! Error types for RouteImpact snapshots.
//!
//! Errors only arise where a snapshot is assembled (builders and JSON
//! parsing). Scoring itself is total and never returns these.

use thiserror::Error;

/// A specialized Result type for snapshot operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while assembling or validating a project snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Snapshot failed shape validation.
    #[error("Invalid snapshot for project '{project}': {reason}")]
    InvalidSnapshot {
        /// The project identifier (may be empty if unknown).
        project: String,
        /// Why the snapshot was rejected.
        reason: String,
    },

    /// A timestamp string could not be parsed.
    #[error("Invalid timestamp in {field}: '{value}'")]
    InvalidTimestamp {
        /// The field holding the timestamp.
        field: String,
        /// The raw value.
        value: String,
    },

    /// The same indicator id appears more than once in a project.
    #[error("Duplicate indicator '{indicator}' in project '{project}'")]
    DuplicateIndicator {
        /// The project identifier.
        project: String,
        /// The repeated indicator id.
        indicator: String,
    },

    /// A numeric field holds NaN or an infinity.
    #[error("Non-finite value in {field} of project '{project}': {value}")]
    NonFiniteValue {
        /// The project identifier.
        project: String,
        /// The offending field.
        field: String,
        /// The value as text.
        value: String,
    },

    /// JSON could not be decoded into a snapshot.
    #[error("JSON error: {message}")]
    Json {
        /// The decoder message.
        message: String,
    },
}

impl CoreError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid snapshot error.
    #[must_use]
    pub fn invalid_snapshot(project: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            project: project.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid timestamp error.
    #[must_use]
    pub fn invalid_timestamp(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a non-finite value error.
    #[must_use]
    pub fn non_finite(project: impl Into<String>, field: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteValue {
            project: project.into(),
            field: field.into(),
            value: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}
