//! Project builder for fluent construction.

use super::{Assumption, Checkin, Outcome, Project, ProjectStatus};
use crate::error::{CoreError, CoreResult};
use crate::ids::ProjectId;

/// Builder for constructing a validated [`Project`].
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use routeimpact_core::prelude::*;
///
/// let checked = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
/// let project = ProjectBuilder::new()
///     .id("PRJ-001")
///     .title("Mangrove restoration")
///     .add_outcome(Outcome::new().with_indicator(Indicator::new("hectares").with_target(40.0)))
///     .add_checkin(Checkin::new(checked, RagStatus::Green))
///     .build()
///     .unwrap();
///
/// assert_eq!(project.id.as_str(), "PRJ-001");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectBuilder {
    id: Option<ProjectId>,
    title: Option<String>,
    status: Option<ProjectStatus>,
    outcomes: Vec<Outcome>,
    checkins: Vec<Checkin>,
    assumptions: Vec<Assumption>,
}

impl ProjectBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<ProjectId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Adds an outcome.
    #[must_use]
    pub fn add_outcome(mut self, outcome: Outcome) -> Self {
        self.outcomes.push(outcome);
        self
    }

    /// Adds multiple outcomes.
    #[must_use]
    pub fn add_outcomes(mut self, outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        self.outcomes.extend(outcomes);
        self
    }

    /// Adds a check-in.
    #[must_use]
    pub fn add_checkin(mut self, checkin: Checkin) -> Self {
        self.checkins.push(checkin);
        self
    }

    /// Adds multiple check-ins.
    #[must_use]
    pub fn add_checkins(mut self, checkins: impl IntoIterator<Item = Checkin>) -> Self {
        self.checkins.extend(checkins);
        self
    }

    /// Adds an assumption.
    #[must_use]
    pub fn add_assumption(mut self, assumption: Assumption) -> Self {
        self.assumptions.push(assumption);
        self
    }

    /// Adds multiple assumptions.
    #[must_use]
    pub fn add_assumptions(mut self, assumptions: impl IntoIterator<Item = Assumption>) -> Self {
        self.assumptions.extend(assumptions);
        self
    }

    /// Builds and validates the project.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is missing or [`Project::validate`] fails.
    pub fn build(self) -> CoreResult<Project> {
        let id = self.id.ok_or_else(|| CoreError::missing_field("id"))?;

        let project = Project {
            id,
            title: self.title,
            status: self.status,
            outcomes: self.outcomes,
            checkins: self.checkins,
            assumptions: self.assumptions,
        };
        project.validate()?;
        Ok(project)
    }
}
