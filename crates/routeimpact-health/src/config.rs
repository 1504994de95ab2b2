//! Configuration for health scoring.
//!
//! Every scoring constant lives here. [`HealthConfig::default`] reproduces
//! the product's calibrated values; changing them changes what a score
//! means, so overrides are expected to be rare and deliberate.

use routeimpact_core::types::RagStatus;
use serde::{Deserialize, Serialize};

use crate::error::{HealthEngineResult, HealthError};

/// Points awarded to an indicator scored on status alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusScores {
    /// GREEN reading.
    pub green: f64,
    /// AMBER reading.
    pub amber: f64,
    /// RED reading.
    pub red: f64,
}

impl Default for StatusScores {
    fn default() -> Self {
        Self {
            green: 100.0,
            amber: 60.0,
            red: 20.0,
        }
    }
}

impl StatusScores {
    /// Points for a status.
    #[must_use]
    pub fn score(&self, status: RagStatus) -> f64 {
        match status {
            RagStatus::Green => self.green,
            RagStatus::Amber => self.amber,
            RagStatus::Red => self.red,
        }
    }
}

/// Configuration for health scoring and portfolio aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Weight of the KPI sub-score in the composite score.
    pub kpi_weight: f64,

    /// Constant added to the weighted score so a perfect KPI score with no
    /// penalties lands on exactly 100.
    pub base_score: f64,

    /// KPI sub-score used when no indicator has a reading.
    pub neutral_kpi_score: f64,

    /// Status-only indicator points.
    pub status_scores: StatusScores,

    /// Penalty per indicator whose latest reading is RED.
    pub red_kpi_penalty: u32,

    /// RED indicator count at which a drift reason is raised.
    pub red_kpi_drift_count: u32,

    /// Penalty when check-ins are missing or stale.
    pub missed_checkin_penalty: u32,

    /// Days after which the latest check-in is considered stale.
    pub max_checkin_age_days: u32,

    /// Penalty per failed HIGH-risk assumption.
    pub failed_assumption_penalty: u32,

    /// Minimum score for GREEN.
    pub green_threshold: u32,

    /// Minimum score for AMBER.
    pub amber_threshold: u32,

    /// Projects scoring below this are drifting.
    pub drift_score_threshold: u32,

    /// Projects with at least this many drift reasons are drifting.
    pub drift_reason_count: usize,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum project count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Number of entries in a status summary's recent check-in list.
    pub recent_checkin_limit: usize,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            kpi_weight: 0.6,
            base_score: 40.0,
            neutral_kpi_score: 50.0,
            status_scores: StatusScores::default(),
            red_kpi_penalty: 8,
            red_kpi_drift_count: 2,
            missed_checkin_penalty: 15,
            max_checkin_age_days: 30,
            failed_assumption_penalty: 10,
            green_threshold: 70,
            amber_threshold: 40,
            drift_score_threshold: 50,
            drift_reason_count: 2,
            parallel: true,
            parallel_threshold: 100, // Use parallel if >=100 projects
            recent_checkin_limit: 5,
        }
    }
}

impl HealthConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `HealthError::ConfigParse` for malformed TOML and
    /// `HealthError::InvalidConfig` if [`validate`](Self::validate) fails.
    pub fn from_toml_str(text: &str) -> HealthEngineResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the RAG thresholds.
    #[must_use]
    pub fn with_rag_thresholds(mut self, green: u32, amber: u32) -> Self {
        self.green_threshold = green;
        self.amber_threshold = amber;
        self
    }

    /// Sets the stale check-in window.
    #[must_use]
    pub fn with_max_checkin_age_days(mut self, days: u32) -> Self {
        self.max_checkin_age_days = days;
        self
    }

    /// Sets the recent check-in list length.
    #[must_use]
    pub fn with_recent_checkin_limit(mut self, limit: usize) -> Self {
        self.recent_checkin_limit = limit;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks that the configuration can produce meaningful scores.
    ///
    /// # Errors
    ///
    /// Returns `HealthError::InvalidConfig` naming the first bad field.
    pub fn validate(&self) -> HealthEngineResult<()> {
        let floats = [
            ("kpi_weight", self.kpi_weight),
            ("base_score", self.base_score),
            ("neutral_kpi_score", self.neutral_kpi_score),
            ("status_scores.green", self.status_scores.green),
            ("status_scores.amber", self.status_scores.amber),
            ("status_scores.red", self.status_scores.red),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(HealthError::invalid_config(field, "must be finite"));
            }
        }

        if self.kpi_weight < 0.0 {
            return Err(HealthError::invalid_config("kpi_weight", "must not be negative"));
        }
        if self.green_threshold > 100 {
            return Err(HealthError::invalid_config("green_threshold", "must be <= 100"));
        }
        if self.amber_threshold > self.green_threshold {
            return Err(HealthError::invalid_config(
                "amber_threshold",
                "must not exceed green_threshold",
            ));
        }
        if self.drift_reason_count == 0 {
            return Err(HealthError::invalid_config("drift_reason_count", "must be at least 1"));
        }
        Ok(())
    }
}
