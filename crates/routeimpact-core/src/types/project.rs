//! Project snapshot: outcomes, indicators, check-ins and assumptions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::assumption::Assumption;
use super::checkin::{Checkin, KpiUpdate};
use super::timestamp::nullable_vec;
use crate::error::{CoreError, CoreResult};
use crate::ids::{IndicatorId, ProjectId};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Being set up.
    Draft,
    /// Running and reporting.
    Active,
    /// Paused.
    OnHold,
    /// Finished.
    Completed,
}

impl ProjectStatus {
    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A measurable quantity tied to an outcome.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Indicator {
    /// Identifier referenced by KPI updates.
    pub id: IndicatorId,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit of measure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Starting value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_value: Option<f64>,
    /// Value the project aims to reach.
    #[serde(default)]
    pub target_value: Option<f64>,
}

impl Indicator {
    /// Creates an indicator with no target.
    #[must_use]
    pub fn new(id: impl Into<IndicatorId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Sets the baseline.
    #[must_use]
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline_value = Some(baseline);
        self
    }

    /// Sets the target.
    #[must_use]
    pub fn with_target(mut self, target: f64) -> Self {
        self.target_value = Some(target);
        self
    }

    /// Returns the target if it is strictly positive.
    #[must_use]
    pub fn positive_target(&self) -> Option<f64> {
        self.target_value.filter(|t| *t > 0.0)
    }
}

/// A stated goal grouping one or more indicators.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outcome {
    /// Row identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Goal statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Indicators measuring this outcome.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub indicators: Vec<Indicator>,
}

impl Outcome {
    /// Creates an outcome with no indicators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the goal statement.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds an indicator.
    #[must_use]
    pub fn with_indicator(mut self, indicator: Indicator) -> Self {
        self.indicators.push(indicator);
        self
    }

    /// Adds several indicators.
    #[must_use]
    pub fn with_indicators(mut self, indicators: impl IntoIterator<Item = Indicator>) -> Self {
        self.indicators.extend(indicators);
        self
    }
}

/// Full nested state of one project, as read from the store.
///
/// The health engine only reads a `Project`; it never sorts or edits the
/// collections in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: ProjectId,
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    /// Outcomes in display order.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub outcomes: Vec<Outcome>,
    /// Check-ins in whatever order the store returned them.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub checkins: Vec<Checkin>,
    /// Assumptions in display order.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub assumptions: Vec<Assumption>,
}

impl Project {
    /// Creates an empty project.
    #[must_use]
    pub fn new(id: impl Into<ProjectId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// All indicators across all outcomes, in outcome order.
    pub fn indicators(&self) -> impl Iterator<Item = &Indicator> {
        self.outcomes.iter().flat_map(|o| o.indicators.iter())
    }

    /// All KPI updates across all check-ins, in snapshot order.
    pub fn kpi_updates(&self) -> impl Iterator<Item = &KpiUpdate> {
        self.checkins.iter().flat_map(|c| c.kpi_updates.iter())
    }

    /// Check-ins newest first. Equal dates keep snapshot order.
    #[must_use]
    pub fn checkins_newest_first(&self) -> Vec<&Checkin> {
        let mut sorted: Vec<&Checkin> = self.checkins.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// The most recently dated check-in.
    #[must_use]
    pub fn latest_checkin(&self) -> Option<&Checkin> {
        // max_by_key returns the last maximum; keep the first one instead.
        self.checkins
            .iter()
            .fold(None, |best: Option<&Checkin>, c| match best {
                Some(b) if b.date >= c.date => Some(b),
                _ => Some(c),
            })
    }

    /// Validates snapshot shape.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the project id is blank
    /// - an indicator id is blank or repeated within the project
    /// - a KPI update references a blank indicator id
    /// - any numeric field is NaN or infinite
    pub fn validate(&self) -> CoreResult<()> {
        if self.id.is_blank() {
            return Err(CoreError::invalid_snapshot("", "project id is blank"));
        }
        let project = self.id.as_str();

        let mut seen: HashSet<&IndicatorId> = HashSet::new();
        for indicator in self.indicators() {
            if indicator.id.is_blank() {
                return Err(CoreError::invalid_snapshot(project, "indicator id is blank"));
            }
            if !seen.insert(&indicator.id) {
                return Err(CoreError::DuplicateIndicator {
                    project: project.to_string(),
                    indicator: indicator.id.to_string(),
                });
            }
            check_finite(project, "target_value", indicator.target_value)?;
            check_finite(project, "baseline_value", indicator.baseline_value)?;
        }

        for update in self.kpi_updates() {
            if update.indicator_id.is_blank() {
                return Err(CoreError::invalid_snapshot(
                    project,
                    "kpi update references a blank indicator id",
                ));
            }
            check_finite(project, "kpi_updates.value", update.value)?;
        }

        Ok(())
    }
}

fn check_finite(project: &str, field: &str, value: Option<f64>) -> CoreResult<()> {
    match value {
        Some(v) if !v.is_finite() => Err(CoreError::non_finite(project, field, v)),
        _ => Ok(()),
    }
}
