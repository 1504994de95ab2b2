//! Traffic-light statuses and trend directions.

use serde::{Deserialize, Serialize};

/// Red/Amber/Green status reported on a check-in or KPI update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RagStatus {
    /// On track.
    Green,
    /// At risk.
    Amber,
    /// Off track.
    Red,
}

impl RagStatus {
    /// Ordinal used to compare consecutive check-ins (GREEN=2, AMBER=1, RED=0).
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Green => 2,
            Self::Amber => 1,
            Self::Red => 0,
        }
    }

    /// Database spelling.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Amber => "AMBER",
            Self::Red => "RED",
        }
    }

    /// Badge label shown next to a status.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "On Track",
            Self::Amber => "At Risk",
            Self::Red => "Off Track",
        }
    }
}

impl std::fmt::Display for RagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// RAG classification of a computed health score.
///
/// `None` only appears at portfolio level, for an empty portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthRag {
    /// Healthy.
    Green,
    /// Needs attention.
    Amber,
    /// Unhealthy.
    Red,
    /// Nothing to score.
    None,
}

impl HealthRag {
    /// Classifies a score: `>= green` is GREEN, `>= amber` is AMBER, else RED.
    #[must_use]
    pub fn from_score(score: u32, green: u32, amber: u32) -> Self {
        if score >= green {
            Self::Green
        } else if score >= amber {
            Self::Amber
        } else {
            Self::Red
        }
    }

    /// Database spelling.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Amber => "AMBER",
            Self::Red => "RED",
            Self::None => "NONE",
        }
    }

    /// Badge label shown next to a health score.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "On Track",
            Self::Amber => "At Risk",
            Self::Red => "Off Track",
            Self::None => "No Data",
        }
    }
}

impl From<RagStatus> for HealthRag {
    fn from(status: RagStatus) -> Self {
        match status {
            RagStatus::Green => Self::Green,
            RagStatus::Amber => Self::Amber,
            RagStatus::Red => Self::Red,
        }
    }
}

impl std::fmt::Display for HealthRag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Direction of travel between the two most recent check-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Latest status ranks above the previous one.
    Improving,
    /// Latest status ranks below the previous one.
    Declining,
    /// Same rank, or only one check-in.
    Stable,
    /// No check-ins.
    NoData,
}

impl Trend {
    /// Compares the latest status with the previous one.
    #[must_use]
    pub fn between(latest: RagStatus, previous: RagStatus) -> Self {
        match latest.rank().cmp(&previous.rank()) {
            std::cmp::Ordering::Greater => Self::Improving,
            std::cmp::Ordering::Less => Self::Declining,
            std::cmp::Ordering::Equal => Self::Stable,
        }
    }

    /// Arrow glyph for compact displays.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Improving => "↑",
            Self::Declining => "↓",
            Self::Stable => "→",
            Self::NoData => "—",
        }
    }

    /// Lower-case label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
            Self::NoData => "no data",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
