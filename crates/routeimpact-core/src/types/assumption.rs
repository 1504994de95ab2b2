//! Project assumptions and their risk levels.

use serde::{Deserialize, Serialize};

/// Status text marking an assumption that turned out false.
pub const FAILED_STATUS: &str = "FAILED";

/// Risk level attached to an assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Low risk if the assumption fails.
    Low,
    /// Medium risk (default on new assumptions).
    #[default]
    Medium,
    /// High risk; failures penalise project health.
    High,
}

impl RiskLevel {
    /// Database spelling.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A planning assumption recorded against a project.
///
/// `status` is free text owned by the surrounding application; only the
/// exact value [`FAILED_STATUS`] carries meaning for scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assumption {
    /// Row identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The assumption statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Risk level.
    pub risk_level: RiskLevel,
    /// Review status; `None` means not yet reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Assumption {
    /// Creates an unreviewed assumption.
    #[must_use]
    pub fn new(risk_level: RiskLevel) -> Self {
        Self {
            risk_level,
            ..Self::default()
        }
    }

    /// Sets the row identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the statement text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the review status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Marks the assumption as failed.
    #[must_use]
    pub fn failed(self) -> Self {
        self.with_status(FAILED_STATUS)
    }

    /// Returns true if the status is exactly `FAILED`.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.status.as_deref() == Some(FAILED_STATUS)
    }

    /// Returns true for a HIGH-risk assumption that has failed.
    #[must_use]
    pub fn is_failed_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High && self.has_failed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_high_risk() {
        assert!(Assumption::new(RiskLevel::High).failed().is_failed_high_risk());
        assert!(!Assumption::new(RiskLevel::Medium).failed().is_failed_high_risk());
        assert!(!Assumption::new(RiskLevel::High).is_failed_high_risk());
        assert!(!Assumption::new(RiskLevel::High)
            .with_status("VALIDATED")
            .is_failed_high_risk());
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert!(!Assumption::new(RiskLevel::High)
            .with_status("failed")
            .has_failed());
    }

    #[test]
    fn test_deserialize_without_status() {
        let a: Assumption =
            serde_json::from_str(r#"{"risk_level":"HIGH","text":"Farmers adopt drip lines"}"#)
                .unwrap();
        assert_eq!(a.risk_level, RiskLevel::High);
        assert!(a.status.is_none());
        assert!(!a.has_failed());
    }
}
