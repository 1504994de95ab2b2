//! Domain types for project snapshots.
//!
//! - [`Project`]: a project with its outcomes, check-ins and assumptions
//! - [`Indicator`] / [`KpiUpdate`]: measured quantities and their readings
//! - [`RagStatus`], [`HealthRag`], [`Trend`]: status vocabulary
//! - [`ProjectBuilder`]: validated construction

mod assumption;
mod builder;
mod checkin;
mod project;
mod status;
pub mod timestamp;

pub use assumption::{Assumption, RiskLevel, FAILED_STATUS};
pub use builder::ProjectBuilder;
pub use checkin::{Checkin, KpiUpdate};
pub use project::{Indicator, Outcome, Project, ProjectStatus};
pub use status::{HealthRag, RagStatus, Trend};
