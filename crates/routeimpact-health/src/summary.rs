//! Portfolio status summary.
//!
//! Counts projects by lifecycle status and by the status of their latest
//! check-in, and lists the most recent check-ins across the portfolio.
//! Unlike [`PortfolioHealthResult`](crate::PortfolioHealthResult) this reads
//! reported statuses only; no scoring is involved.

use chrono::{DateTime, Utc};
use routeimpact_core::ids::ProjectId;
use routeimpact_core::types::{Project, ProjectStatus, RagStatus};
use serde::Serialize;

use crate::config::HealthConfig;
use crate::parallel::maybe_parallel_filter_map;

/// The latest check-in of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentCheckin {
    /// Project identifier.
    pub project_id: ProjectId,
    /// Project title, if known.
    pub title: Option<String>,
    /// Check-in date.
    pub date: DateTime<Utc>,
    /// Reported overall status.
    pub status: RagStatus,
    /// Reporting period label.
    pub period_label: Option<String>,
    /// Narrative notes.
    pub notes: Option<String>,
}

/// Status counts across a portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStatusSummary {
    /// Number of projects.
    pub total: usize,
    /// Projects in DRAFT.
    pub draft: usize,
    /// Projects in ACTIVE.
    pub active: usize,
    /// Projects ON_HOLD.
    pub on_hold: usize,
    /// Projects COMPLETED.
    pub completed: usize,
    /// Projects whose latest check-in is GREEN.
    pub on_track: usize,
    /// Projects whose latest check-in is AMBER.
    pub at_risk: usize,
    /// Projects whose latest check-in is RED.
    pub off_track: usize,
    /// Projects that have never checked in.
    pub no_checkins: usize,
    /// Latest check-in per project, newest first.
    pub recent_checkins: Vec<RecentCheckin>,
}

impl PortfolioStatusSummary {
    /// Number of projects with a given lifecycle status.
    #[must_use]
    pub fn count_by_status(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Draft => self.draft,
            ProjectStatus::Active => self.active,
            ProjectStatus::OnHold => self.on_hold,
            ProjectStatus::Completed => self.completed,
        }
    }

    /// Number of projects whose latest check-in reported `status`.
    #[must_use]
    pub fn count_by_latest(&self, status: RagStatus) -> usize {
        match status {
            RagStatus::Green => self.on_track,
            RagStatus::Amber => self.at_risk,
            RagStatus::Red => self.off_track,
        }
    }
}

/// Summarizes lifecycle and latest check-in statuses of a portfolio.
///
/// `recent_checkins` holds at most `config.recent_checkin_limit` entries,
/// newest first; projects with equally dated check-ins keep input order.
#[must_use]
pub fn summarize_portfolio(projects: &[Project], config: &HealthConfig) -> PortfolioStatusSummary {
    let mut summary = PortfolioStatusSummary {
        total: projects.len(),
        ..PortfolioStatusSummary::default()
    };

    for project in projects {
        match project.status {
            Some(ProjectStatus::Draft) => summary.draft += 1,
            Some(ProjectStatus::Active) => summary.active += 1,
            Some(ProjectStatus::OnHold) => summary.on_hold += 1,
            Some(ProjectStatus::Completed) => summary.completed += 1,
            None => {}
        }
    }

    let mut latest = maybe_parallel_filter_map(projects, config, |project| {
        project.latest_checkin().map(|checkin| RecentCheckin {
            project_id: project.id.clone(),
            title: project.title.clone(),
            date: checkin.date,
            status: checkin.overall_status,
            period_label: checkin.period_label.clone(),
            notes: checkin.notes.clone(),
        })
    });

    for entry in &latest {
        match entry.status {
            RagStatus::Green => summary.on_track += 1,
            RagStatus::Amber => summary.at_risk += 1,
            RagStatus::Red => summary.off_track += 1,
        }
    }
    summary.no_checkins = projects.len() - latest.len();

    latest.sort_by(|a, b| b.date.cmp(&a.date));
    latest.truncate(config.recent_checkin_limit);
    summary.recent_checkins = latest;

    summary
}
