//! # RouteImpact Core
//!
//! Snapshot types for the RouteImpact project health engine.
//!
//! A [`Project`](types::Project) carries everything the engine reads:
//!
//! - **Outcomes** and their **indicators** (with optional numeric targets)
//! - **Check-ins** with an overall RAG status and per-indicator KPI updates
//! - **Assumptions** with a risk level and a review status
//!
//! ## Design Philosophy
//!
//! - **Typed snapshots**: explicit structs with `Option` for nullable columns
//! - **Validate at the edge**: [`ProjectBuilder`](types::ProjectBuilder) and
//!   [`snapshot`] check shape once, so scoring never has to
//! - **Read-only**: nothing here sorts or edits caller data in place
//!
//! ## Example
//!
//! ```rust
//! use routeimpact_core::snapshot::parse_project;
//!
//! let project = parse_project(r#"{"id": "p1", "checkins": null}"#).unwrap();
//! assert!(project.checkins.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod ids;
pub mod snapshot;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use ids::{IndicatorId, ProjectId};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::ids::{IndicatorId, ProjectId};
    pub use crate::types::{
        Assumption, Checkin, HealthRag, Indicator, KpiUpdate, Outcome, Project, ProjectBuilder,
        ProjectStatus, RagStatus, RiskLevel, Trend,
    };
}
