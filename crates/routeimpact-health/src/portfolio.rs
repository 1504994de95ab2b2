//! Portfolio-level health aggregation.
//!
//! Each project is scored independently from its own snapshot, so the
//! per-project work fans out freely; results are always reported in input
//! order.

use chrono::{DateTime, Utc};
use routeimpact_core::ids::ProjectId;
use routeimpact_core::types::{HealthRag, Project};
use serde::Serialize;
use tracing::debug;

use crate::calculator::{round_half_up, ProjectHealthCalculator};
use crate::config::HealthConfig;
use crate::parallel::maybe_parallel_map;

/// Headline health of one project inside a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScore {
    /// Project identifier.
    pub id: ProjectId,
    /// Composite score, 0-100.
    pub score: u32,
    /// RAG band of the score.
    pub rag: HealthRag,
    /// Whether the project is drifting.
    pub is_drifting: bool,
}

/// Aggregate health of a set of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHealthResult {
    /// Rounded mean of project scores; 0 for an empty portfolio.
    pub avg_score: u32,
    /// RAG band of `avg_score`; `None` for an empty portfolio.
    pub rag: HealthRag,
    /// Number of drifting projects.
    pub drifting_count: usize,
    /// Per-project results in input order.
    pub scores: Vec<ProjectScore>,
}

impl PortfolioHealthResult {
    /// The result for a portfolio with no projects.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            avg_score: 0,
            rag: HealthRag::None,
            drifting_count: 0,
            scores: Vec::new(),
        }
    }

    /// Returns true if no projects were scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of projects in a RAG band.
    #[must_use]
    pub fn count_by_rag(&self, rag: HealthRag) -> usize {
        self.scores.iter().filter(|s| s.rag == rag).count()
    }

    /// Drifting projects, in input order.
    pub fn drifting(&self) -> impl Iterator<Item = &ProjectScore> {
        self.scores.iter().filter(|s| s.is_drifting)
    }
}

/// Reduces per-project health into a portfolio summary.
#[derive(Debug, Clone, Default)]
pub struct PortfolioHealthAggregator {
    calculator: ProjectHealthCalculator,
}

impl PortfolioHealthAggregator {
    /// Creates an aggregator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator with a custom configuration.
    #[must_use]
    pub fn with_config(config: HealthConfig) -> Self {
        Self {
            calculator: ProjectHealthCalculator::with_config(config),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &HealthConfig {
        self.calculator.config()
    }

    /// Scores every project and aggregates the results.
    #[must_use]
    pub fn calculate(&self, projects: &[Project], as_of: DateTime<Utc>) -> PortfolioHealthResult {
        if projects.is_empty() {
            return PortfolioHealthResult::empty();
        }

        let config = self.config();
        let scores = maybe_parallel_map(projects, config, |project| {
            let health = self.calculator.calculate(project, as_of);
            ProjectScore {
                id: project.id.clone(),
                score: health.score,
                rag: health.rag,
                is_drifting: health.is_drifting,
            }
        });

        let total: u64 = scores.iter().map(|s| u64::from(s.score)).sum();
        let avg_score = round_half_up(total as f64 / scores.len() as f64) as u32;
        let drifting_count = scores.iter().filter(|s| s.is_drifting).count();
        let rag = HealthRag::from_score(avg_score, config.green_threshold, config.amber_threshold);

        debug!(
            projects = scores.len(),
            avg_score,
            rag = %rag,
            drifting_count,
            "portfolio health calculated"
        );

        PortfolioHealthResult {
            avg_score,
            rag,
            drifting_count,
            scores,
        }
    }
}

/// Calculates portfolio health with the default configuration.
#[must_use]
pub fn calculate_portfolio_health(
    projects: &[Project],
    as_of: DateTime<Utc>,
) -> PortfolioHealthResult {
    PortfolioHealthAggregator::new().calculate(projects, as_of)
}
