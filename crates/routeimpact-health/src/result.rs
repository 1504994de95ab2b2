//! Health calculation outputs.

use routeimpact_core::types::{HealthRag, Trend};
use serde::{Serialize, Serializer};
use std::fmt;

/// Why a project is judged to be drifting off its planned trajectory.
///
/// `Display` produces the human-readable text shown in drift alerts; that is
/// also the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriftReason {
    /// Several indicators currently read RED.
    RedKpis {
        /// Number of RED indicators.
        count: u32,
    },
    /// The project has never checked in.
    NoCheckins,
    /// The latest check-in is older than the allowed window.
    StaleCheckin {
        /// Whole days since the latest check-in.
        days: u64,
    },
    /// HIGH-risk assumptions were marked failed.
    FailedAssumptions {
        /// Number of failed HIGH-risk assumptions.
        count: u32,
    },
}

impl fmt::Display for DriftReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedKpis { count } => write!(f, "{count} KPIs are RED"),
            Self::NoCheckins => write!(f, "No check-ins recorded"),
            Self::StaleCheckin { days } => write!(f, "No check-in for {days} days"),
            Self::FailedAssumptions { count } => {
                let noun = if *count > 1 { "assumptions" } else { "assumption" };
                write!(f, "{count} HIGH-risk {noun} failed")
            }
        }
    }
}

impl Serialize for DriftReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Intermediate sub-scores, kept for auditability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBreakdown {
    /// KPI performance sub-score, rounded. Can be negative when readings
    /// run against their targets.
    pub kpi_score: i64,
    /// Points deducted for RED indicators.
    pub red_kpi_penalty: u32,
    /// Points deducted for missing or stale check-ins.
    pub missed_checkin_penalty: u32,
    /// Points deducted for failed HIGH-risk assumptions.
    pub assumption_penalty: u32,
}

impl HealthBreakdown {
    /// Sum of all penalties.
    #[must_use]
    pub fn total_penalty(&self) -> u32 {
        self.red_kpi_penalty
            .saturating_add(self.missed_checkin_penalty)
            .saturating_add(self.assumption_penalty)
    }
}

/// Health of a single project at an evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResult {
    /// Composite score, 0-100.
    pub score: u32,
    /// RAG band of the score. Never `None` for a single project.
    pub rag: HealthRag,
    /// Direction between the two latest check-ins.
    pub trend: Trend,
    /// Whether the project is off route.
    pub is_drifting: bool,
    /// Reasons in evaluation order.
    pub drift_reasons: Vec<DriftReason>,
    /// Sub-scores behind `score`.
    pub breakdown: HealthBreakdown,
}

impl HealthResult {
    /// Drift reasons as display strings.
    #[must_use]
    pub fn drift_messages(&self) -> Vec<String> {
        self.drift_reasons.iter().map(ToString::to_string).collect()
    }
}
