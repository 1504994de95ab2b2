//! # RouteImpact Health
//!
//! Health scoring and drift detection for project portfolios.
//!
//! Turns a project's nested snapshot (outcomes, indicators, check-ins, KPI
//! updates, assumptions) into a single comparable signal and rolls those up
//! across a portfolio.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O, no wall clock, inputs are never mutated
//! - **Explicit evaluation time**: every calculation takes an `as_of` timestamp
//! - **Config-driven constants**: weights, penalties and thresholds live in
//!   [`HealthConfig`]; the defaults are the product's calibrated values
//! - **Config-driven parallelism**: optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use routeimpact_health::prelude::*;
//!
//! let as_of = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();
//! let project = ProjectBuilder::new()
//!     .id("PRJ-7")
//!     .add_assumption(Assumption::new(RiskLevel::High).failed())
//!     .add_assumption(Assumption::new(RiskLevel::High).failed())
//!     .build()
//!     .unwrap();
//!
//! let health = calculate_health(&project, as_of);
//! assert_eq!(health.score, 35);
//! assert_eq!(health.rag, HealthRag::Red);
//! assert!(health.is_drifting);
//!
//! let portfolio = calculate_portfolio_health(&[project], as_of);
//! assert_eq!(portfolio.drifting_count, 1);
//! ```
//!
//! ## Module Overview
//!
//! - [`calculator`] - Single-project health score, RAG, trend and drift
//! - [`portfolio`] - Portfolio aggregation
//! - [`summary`] - Lifecycle and latest check-in status counts
//! - [`config`] - Scoring constants and parallelism settings
//! - [`result`] - Output types
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod parallel;
pub mod portfolio;
pub mod result;
pub mod summary;

pub use calculator::{calculate_health, latest_updates, KpiPerformance, ProjectHealthCalculator};
pub use config::{HealthConfig, StatusScores};
pub use error::{HealthEngineResult, HealthError};
pub use parallel::{maybe_parallel_filter_map, maybe_parallel_map};
pub use portfolio::{
    calculate_portfolio_health, PortfolioHealthAggregator, PortfolioHealthResult, ProjectScore,
};
pub use result::{DriftReason, HealthBreakdown, HealthResult};
pub use summary::{summarize_portfolio, PortfolioStatusSummary, RecentCheckin};

/// Prelude module for convenient imports.
///
/// ```rust
/// use routeimpact_health::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::calculator::{calculate_health, latest_updates, ProjectHealthCalculator};
    pub use crate::config::HealthConfig;
    pub use crate::error::{HealthEngineResult, HealthError};
    pub use crate::portfolio::{
        calculate_portfolio_health, PortfolioHealthAggregator, PortfolioHealthResult, ProjectScore,
    };
    pub use crate::result::{DriftReason, HealthBreakdown, HealthResult};
    pub use crate::summary::{summarize_portfolio, PortfolioStatusSummary};

    // Snapshot types
    pub use routeimpact_core::prelude::*;
}
