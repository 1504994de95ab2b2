//! Project health calculation.
//!
//! The composite score is
//!
//! ```text
//! raw   = kpi_score * kpi_weight - red_kpi_penalty - missed_checkin_penalty - assumption_penalty
//! score = clamp(round(raw + base_score), 0, 100)
//! ```
//!
//! With the default weights a perfect KPI score and no penalties gives
//! exactly 100, and a project with no readings at all starts from 70 before
//! penalties. That optimistic default is intended.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use routeimpact_core::ids::IndicatorId;
use routeimpact_core::types::{Checkin, HealthRag, KpiUpdate, Project, RagStatus, Trend};
use tracing::{debug, trace};

use crate::config::HealthConfig;
use crate::result::{DriftReason, HealthBreakdown, HealthResult};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Rounds half-way values towards positive infinity (`-2.5` becomes `-2`).
///
/// Compares the fractional part instead of adding 0.5, which would carry
/// values just below one half up to the next integer.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// KPI performance of a project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiPerformance {
    /// Mean performance, or the neutral score if nothing was scored.
    pub score: f64,
    /// Indicators whose latest reading is RED.
    pub red_count: u32,
    /// Indicators that contributed to `score`.
    pub scored: usize,
}

/// Computes [`HealthResult`]s from project snapshots.
///
/// The calculator holds only configuration; it is cheap to clone and safe to
/// share across threads.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use routeimpact_core::prelude::*;
/// use routeimpact_health::ProjectHealthCalculator;
///
/// let as_of = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();
/// let project = ProjectBuilder::new()
///     .id("p1")
///     .add_checkin(Checkin::new(as_of - Duration::days(10), RagStatus::Green))
///     .build()
///     .unwrap();
///
/// let health = ProjectHealthCalculator::new().calculate(&project, as_of);
/// assert_eq!(health.score, 70);
/// assert_eq!(health.rag, HealthRag::Green);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectHealthCalculator {
    config: HealthConfig,
}

impl ProjectHealthCalculator {
    /// Creates a calculator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a custom configuration.
    #[must_use]
    pub fn with_config(config: HealthConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    /// Calculates the health of one project as of `as_of`.
    ///
    /// Never fails: empty collections, missing values and missing assumption
    /// statuses fall back to neutral defaults.
    #[must_use]
    pub fn calculate(&self, project: &Project, as_of: DateTime<Utc>) -> HealthResult {
        let config = &self.config;
        let mut drift_reasons = Vec::new();

        let kpi = self.kpi_performance(project);
        let red_kpi_penalty = kpi.red_count.saturating_mul(config.red_kpi_penalty);
        if kpi.red_count >= config.red_kpi_drift_count {
            drift_reasons.push(DriftReason::RedKpis {
                count: kpi.red_count,
            });
        }

        let checkins = project.checkins_newest_first();
        let missed_checkin_penalty = match checkins.first() {
            None => {
                drift_reasons.push(DriftReason::NoCheckins);
                config.missed_checkin_penalty
            }
            Some(latest) => {
                let days = days_between(latest.date, as_of);
                if days > f64::from(config.max_checkin_age_days) {
                    drift_reasons.push(DriftReason::StaleCheckin {
                        days: days.floor() as u64,
                    });
                    config.missed_checkin_penalty
                } else {
                    0
                }
            }
        };

        let failed_high = failed_high_risk_count(project);
        let assumption_penalty = failed_high.saturating_mul(config.failed_assumption_penalty);
        if failed_high > 0 {
            drift_reasons.push(DriftReason::FailedAssumptions { count: failed_high });
        }

        let raw = kpi.score * config.kpi_weight
            - f64::from(red_kpi_penalty)
            - f64::from(missed_checkin_penalty)
            - f64::from(assumption_penalty);
        let score = round_half_up(raw + config.base_score).clamp(0.0, 100.0) as u32;

        let rag = HealthRag::from_score(score, config.green_threshold, config.amber_threshold);
        let trend = trend(&checkins);
        let is_drifting = score < config.drift_score_threshold
            || drift_reasons.len() >= config.drift_reason_count;

        debug!(
            project = %project.id,
            score,
            rag = %rag,
            trend = %trend,
            is_drifting,
            kpi_score = kpi.score,
            scored_indicators = kpi.scored,
            "project health calculated"
        );
        for reason in &drift_reasons {
            trace!(project = %project.id, reason = %reason, "drift reason");
        }

        HealthResult {
            score,
            rag,
            trend,
            is_drifting,
            drift_reasons,
            breakdown: HealthBreakdown {
                kpi_score: round_half_up(kpi.score) as i64,
                red_kpi_penalty,
                missed_checkin_penalty,
                assumption_penalty,
            },
        }
    }

    /// Scores every indicator that has at least one reading.
    ///
    /// Indicators with a positive target and a numeric reading score
    /// `min(value / target * 100, 100)`, with no lower bound. All others
    /// score on status. A RED latest reading is counted whichever path
    /// scored the indicator.
    #[must_use]
    pub fn kpi_performance(&self, project: &Project) -> KpiPerformance {
        let latest = latest_updates(project);
        let mut total = 0.0;
        let mut scored = 0usize;
        let mut red_count = 0u32;

        for indicator in project.indicators() {
            let Some(update) = latest.get(&indicator.id) else {
                continue;
            };

            if update.status == RagStatus::Red {
                red_count = red_count.saturating_add(1);
            }

            let performance = match (indicator.positive_target(), update.value) {
                (Some(target), Some(value)) => (value / target * 100.0).min(100.0),
                _ => self.config.status_scores.score(update.status),
            };
            total += performance;
            scored += 1;
        }

        let score = if scored > 0 {
            total / scored as f64
        } else {
            self.config.neutral_kpi_score
        };

        KpiPerformance {
            score,
            red_count,
            scored,
        }
    }
}

/// Calculates project health with the default configuration.
#[must_use]
pub fn calculate_health(project: &Project, as_of: DateTime<Utc>) -> HealthResult {
    ProjectHealthCalculator::new().calculate(project, as_of)
}

/// Latest KPI update per indicator, by `created_at`.
///
/// This is the current reading shown against each indicator. Updates for
/// indicators the project does not define are included. On equal
/// timestamps the first update in snapshot order wins (check-ins in input
/// order, then updates in input order).
#[must_use]
pub fn latest_updates(project: &Project) -> HashMap<&IndicatorId, &KpiUpdate> {
    let mut latest: HashMap<&IndicatorId, &KpiUpdate> = HashMap::new();
    for update in project.kpi_updates() {
        latest
            .entry(&update.indicator_id)
            .and_modify(|current| {
                if update.created_at > current.created_at {
                    *current = update;
                }
            })
            .or_insert(update);
    }
    latest
}

fn failed_high_risk_count(project: &Project) -> u32 {
    let count = project
        .assumptions
        .iter()
        .filter(|a| a.is_failed_high_risk())
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Fractional days from `from` to `to`. Negative if `from` is in the future.
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    to.signed_duration_since(from).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Trend from check-ins sorted newest first.
fn trend(newest_first: &[&Checkin]) -> Trend {
    match newest_first {
        [] => Trend::NoData,
        [_] => Trend::Stable,
        [latest, previous, ..] => Trend::between(latest.overall_status, previous.overall_status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone};
    use routeimpact_core::types::{Assumption, Indicator, Outcome, ProjectBuilder, RiskLevel};

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        as_of() - Duration::days(days)
    }

    fn fresh_checkin(status: RagStatus) -> Checkin {
        Checkin::new(days_ago(5), status)
    }

    #[test]
    fn test_round_half_up() {
        assert_relative_eq!(round_half_up(2.5), 3.0);
        assert_relative_eq!(round_half_up(-2.5), -2.0);
        assert_relative_eq!(round_half_up(69.49), 69.0);
        assert_relative_eq!(round_half_up(-0.4), 0.0);
        assert_relative_eq!(round_half_up(-0.5), 0.0);
        assert_relative_eq!(round_half_up(0.5), 1.0);
    }

    #[test]
    fn test_round_half_up_just_below_half() {
        // 0.49999999999999994 + 0.5 is exactly 1.0 in f64.
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
        assert_eq!(round_half_up(-1.500_000_000_000_000_2), -2.0);
    }

    #[test]
    fn test_round_half_up_large_odd_values() {
        let odd = 4_503_599_627_370_497.0; // 2^52 + 1
        assert_eq!(round_half_up(odd), odd);
        assert_eq!(round_half_up(-odd), -odd);
    }

    #[test]
    fn test_kpi_score_just_below_half_rounds_down() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(Outcome::new().with_indicator(Indicator::new("i1").with_target(100.0)))
            .add_checkin(fresh_checkin(RagStatus::Amber).with_update(
                KpiUpdate::new("i1", RagStatus::Amber, days_ago(5))
                    .with_value(0.499_999_999_999_999_94),
            ))
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.kpi_score, 0);
        assert_eq!(health.score, 40);
    }

    #[test]
    fn test_empty_project_defaults() {
        let project = Project::new("p1");
        let health = calculate_health(&project, as_of());

        assert_eq!(health.breakdown.kpi_score, 50);
        assert_eq!(health.breakdown.missed_checkin_penalty, 15);
        assert_eq!(health.score, 55);
        assert_eq!(health.rag, HealthRag::Amber);
        assert_eq!(health.trend, Trend::NoData);
        assert!(!health.is_drifting);
        assert_eq!(health.drift_reasons, vec![DriftReason::NoCheckins]);
    }

    #[test]
    fn test_one_recent_green_checkin() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(Checkin::new(days_ago(10), RagStatus::Green))
            .build()
            .unwrap();
        let health = calculate_health(&project, as_of());

        assert_eq!(health.breakdown.kpi_score, 50);
        assert_eq!(health.breakdown.total_penalty(), 0);
        assert_eq!(health.score, 70);
        assert_eq!(health.rag, HealthRag::Green);
        assert_eq!(health.trend, Trend::Stable);
        assert!(!health.is_drifting);
        assert!(health.drift_reasons.is_empty());
    }

    #[test]
    fn test_target_percentage_path() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(
                Outcome::new()
                    .with_indicator(Indicator::new("exact").with_target(200.0))
                    .with_indicator(Indicator::new("half").with_target(200.0))
                    .with_indicator(Indicator::new("over").with_target(10.0)),
            )
            .add_checkin(fresh_checkin(RagStatus::Green).with_updates(vec![
                KpiUpdate::new("exact", RagStatus::Red, days_ago(5)).with_value(200.0),
                KpiUpdate::new("half", RagStatus::Amber, days_ago(5)).with_value(100.0),
                KpiUpdate::new("over", RagStatus::Green, days_ago(5)).with_value(35.0),
            ]))
            .build()
            .unwrap();

        let kpi = ProjectHealthCalculator::new().kpi_performance(&project);
        assert_relative_eq!(kpi.score, (100.0 + 50.0 + 100.0) / 3.0);
        // RED status is counted even though the indicator scored on target.
        assert_eq!(kpi.red_count, 1);
        assert_eq!(kpi.scored, 3);
    }

    #[test]
    fn test_negative_ratio_is_not_clamped() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(Outcome::new().with_indicator(Indicator::new("i1").with_target(10.0)))
            .add_checkin(fresh_checkin(RagStatus::Amber).with_update(
                KpiUpdate::new("i1", RagStatus::Amber, days_ago(5)).with_value(-5.0),
            ))
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.kpi_score, -50);
        // -50 * 0.6 + 40 = 10
        assert_eq!(health.score, 10);
        assert_eq!(health.rag, HealthRag::Red);
        assert!(health.is_drifting);
    }

    #[test]
    fn test_status_only_path() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(
                Outcome::new()
                    .with_indicator(Indicator::new("no-target"))
                    .with_indicator(Indicator::new("zero-target").with_target(0.0))
                    .with_indicator(Indicator::new("null-value").with_target(50.0)),
            )
            .add_checkin(fresh_checkin(RagStatus::Green).with_updates(vec![
                KpiUpdate::new("no-target", RagStatus::Green, days_ago(5)).with_value(3.0),
                KpiUpdate::new("zero-target", RagStatus::Amber, days_ago(5)).with_value(3.0),
                KpiUpdate::new("null-value", RagStatus::Red, days_ago(5)),
            ]))
            .build()
            .unwrap();

        let kpi = ProjectHealthCalculator::new().kpi_performance(&project);
        assert_relative_eq!(kpi.score, (100.0 + 60.0 + 20.0) / 3.0);
        assert_eq!(kpi.red_count, 1);
    }

    #[test]
    fn test_indicator_without_update_is_skipped() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(
                Outcome::new()
                    .with_indicator(Indicator::new("read"))
                    .with_indicator(Indicator::new("silent").with_target(100.0)),
            )
            .add_checkin(
                fresh_checkin(RagStatus::Green)
                    .with_update(KpiUpdate::new("read", RagStatus::Amber, days_ago(5))),
            )
            .build()
            .unwrap();

        let kpi = ProjectHealthCalculator::new().kpi_performance(&project);
        assert_eq!(kpi.scored, 1);
        assert_relative_eq!(kpi.score, 60.0);
    }

    #[test]
    fn test_orphan_updates_are_ignored() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(
                fresh_checkin(RagStatus::Green)
                    .with_update(KpiUpdate::new("ghost", RagStatus::Red, days_ago(5))),
            )
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.kpi_score, 50);
        assert_eq!(health.breakdown.red_kpi_penalty, 0);
    }

    #[test]
    fn test_latest_update_across_checkins() {
        // The newer reading sits in the older check-in.
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(Outcome::new().with_indicator(Indicator::new("i1")))
            .add_checkin(
                Checkin::new(days_ago(3), RagStatus::Green)
                    .with_update(KpiUpdate::new("i1", RagStatus::Red, days_ago(20))),
            )
            .add_checkin(
                Checkin::new(days_ago(20), RagStatus::Green)
                    .with_update(KpiUpdate::new("i1", RagStatus::Green, days_ago(2))),
            )
            .build()
            .unwrap();

        let kpi = ProjectHealthCalculator::new().kpi_performance(&project);
        assert_relative_eq!(kpi.score, 100.0);
        assert_eq!(kpi.red_count, 0);
    }

    #[test]
    fn test_latest_update_tie_prefers_first_in_snapshot() {
        let stamp = days_ago(4);
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(Outcome::new().with_indicator(Indicator::new("i1")))
            .add_checkin(
                fresh_checkin(RagStatus::Green)
                    .with_update(KpiUpdate::new("i1", RagStatus::Amber, stamp))
                    .with_update(KpiUpdate::new("i1", RagStatus::Red, stamp)),
            )
            .add_checkin(
                fresh_checkin(RagStatus::Green)
                    .with_update(KpiUpdate::new("i1", RagStatus::Green, stamp)),
            )
            .build()
            .unwrap();

        let kpi = ProjectHealthCalculator::new().kpi_performance(&project);
        assert_relative_eq!(kpi.score, 60.0);
        assert_eq!(kpi.red_count, 0);
    }

    #[test]
    fn test_latest_updates_per_indicator() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(
                Outcome::new()
                    .with_indicator(Indicator::new("i1"))
                    .with_indicator(Indicator::new("i2"))
                    .with_indicator(Indicator::new("i3")),
            )
            .add_checkin(
                Checkin::new(days_ago(30), RagStatus::Amber)
                    .with_update(KpiUpdate::new("i1", RagStatus::Red, days_ago(30)).with_value(1.0))
                    .with_update(KpiUpdate::new("i2", RagStatus::Amber, days_ago(30))),
            )
            .add_checkin(
                Checkin::new(days_ago(2), RagStatus::Green)
                    .with_update(KpiUpdate::new("i1", RagStatus::Green, days_ago(2)).with_value(9.0)),
            )
            .build()
            .unwrap();

        let latest = latest_updates(&project);
        assert_eq!(latest.len(), 2);
        let i1 = latest.get(&IndicatorId::new("i1")).unwrap();
        assert_eq!((i1.status, i1.value), (RagStatus::Green, Some(9.0)));
        assert_eq!(latest.get(&IndicatorId::new("i2")).unwrap().status, RagStatus::Amber);
        assert!(latest.get(&IndicatorId::new("i3")).is_none());
    }

    #[test]
    fn test_red_kpi_penalty_and_reason() {
        let indicators = ["a", "b", "c"];
        let mut outcome = Outcome::new();
        let mut checkin = fresh_checkin(RagStatus::Red);
        for id in indicators {
            outcome = outcome.with_indicator(Indicator::new(id));
            checkin = checkin.with_update(KpiUpdate::new(id, RagStatus::Red, days_ago(5)));
        }
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(outcome)
            .add_checkin(checkin)
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.kpi_score, 20);
        assert_eq!(health.breakdown.red_kpi_penalty, 24);
        // 20 * 0.6 - 24 + 40 = 28
        assert_eq!(health.score, 28);
        assert_eq!(health.drift_reasons, vec![DriftReason::RedKpis { count: 3 }]);
        assert!(health.is_drifting);
    }

    #[test]
    fn test_single_red_kpi_has_no_reason() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(Outcome::new().with_indicator(Indicator::new("a")))
            .add_checkin(
                fresh_checkin(RagStatus::Green)
                    .with_update(KpiUpdate::new("a", RagStatus::Red, days_ago(5))),
            )
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.red_kpi_penalty, 8);
        assert!(health.drift_reasons.is_empty());
    }

    #[test]
    fn test_stale_checkin() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(Checkin::new(
                as_of() - Duration::hours(45 * 24 + 20),
                RagStatus::Green,
            ))
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.missed_checkin_penalty, 15);
        assert_eq!(
            health.drift_reasons,
            vec![DriftReason::StaleCheckin { days: 45 }]
        );
        assert_eq!(health.score, 55);
    }

    #[test]
    fn test_checkin_exactly_at_window_is_fresh() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(Checkin::new(days_ago(30), RagStatus::Green))
            .build()
            .unwrap();
        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.missed_checkin_penalty, 0);

        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(Checkin::new(
                days_ago(30) - Duration::minutes(1),
                RagStatus::Green,
            ))
            .build()
            .unwrap();
        let health = calculate_health(&project, as_of());
        assert_eq!(
            health.drift_reasons,
            vec![DriftReason::StaleCheckin { days: 30 }]
        );
    }

    #[test]
    fn test_future_checkin_is_fresh() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(Checkin::new(as_of() + Duration::days(3), RagStatus::Amber))
            .build()
            .unwrap();
        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.missed_checkin_penalty, 0);
    }

    #[test]
    fn test_staleness_uses_newest_checkin_regardless_of_order() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(Checkin::new(days_ago(90), RagStatus::Red))
            .add_checkin(Checkin::new(days_ago(2), RagStatus::Green))
            .add_checkin(Checkin::new(days_ago(60), RagStatus::Amber))
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.missed_checkin_penalty, 0);
        // GREEN (2 days) against AMBER (60 days)
        assert_eq!(health.trend, Trend::Improving);
    }

    #[test]
    fn test_trend() {
        let build = |statuses: &[(i64, RagStatus)]| {
            ProjectBuilder::new()
                .id("p1")
                .add_checkins(statuses.iter().map(|(d, s)| Checkin::new(days_ago(*d), *s)))
                .build()
                .unwrap()
        };

        let declining = build(&[(1, RagStatus::Red), (10, RagStatus::Green)]);
        assert_eq!(calculate_health(&declining, as_of()).trend, Trend::Declining);

        let stable = build(&[(1, RagStatus::Amber), (10, RagStatus::Amber), (20, RagStatus::Red)]);
        assert_eq!(calculate_health(&stable, as_of()).trend, Trend::Stable);

        let improving = build(&[(10, RagStatus::Red), (1, RagStatus::Amber)]);
        assert_eq!(calculate_health(&improving, as_of()).trend, Trend::Improving);
    }

    #[test]
    fn test_failed_assumptions() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(fresh_checkin(RagStatus::Green))
            .add_assumption(Assumption::new(RiskLevel::High).failed())
            .add_assumption(Assumption::new(RiskLevel::Medium).failed())
            .add_assumption(Assumption::new(RiskLevel::High))
            .add_assumption(Assumption::new(RiskLevel::High).with_status("VALIDATED"))
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.assumption_penalty, 10);
        assert_eq!(
            health.drift_reasons,
            vec![DriftReason::FailedAssumptions { count: 1 }]
        );
        assert_eq!(health.score, 60);
        assert_eq!(health.rag, HealthRag::Amber);
        assert!(!health.is_drifting);
    }

    #[test]
    fn test_reason_order_and_drift_by_count() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_outcome(
                Outcome::new()
                    .with_indicator(Indicator::new("a").with_target(10.0))
                    .with_indicator(Indicator::new("b").with_target(10.0)),
            )
            .add_checkin(Checkin::new(days_ago(40), RagStatus::Red).with_updates(vec![
                KpiUpdate::new("a", RagStatus::Red, days_ago(40)).with_value(10.0),
                KpiUpdate::new("b", RagStatus::Red, days_ago(40)).with_value(10.0),
            ]))
            .add_assumption(Assumption::new(RiskLevel::High).failed())
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(
            health.drift_messages(),
            vec![
                "2 KPIs are RED".to_string(),
                "No check-in for 40 days".to_string(),
                "1 HIGH-risk assumption failed".to_string(),
            ]
        );
        // 100 * 0.6 - 16 - 15 - 10 + 40 = 59
        assert_eq!(health.score, 59);
        assert!(health.is_drifting);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let assumptions = (0..12).map(|_| Assumption::new(RiskLevel::High).failed());
        let project = ProjectBuilder::new()
            .id("p1")
            .add_assumptions(assumptions)
            .build()
            .unwrap();

        let health = calculate_health(&project, as_of());
        assert_eq!(health.breakdown.assumption_penalty, 120);
        assert_eq!(health.score, 0);
        assert_eq!(health.rag, HealthRag::Red);
    }

    #[test]
    fn test_custom_config() {
        let config = HealthConfig::default()
            .with_max_checkin_age_days(7)
            .with_rag_thresholds(90, 60);
        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(Checkin::new(days_ago(10), RagStatus::Green))
            .build()
            .unwrap();

        let health = ProjectHealthCalculator::with_config(config).calculate(&project, as_of());
        assert_eq!(
            health.drift_reasons,
            vec![DriftReason::StaleCheckin { days: 10 }]
        );
        assert_eq!(health.score, 55);
        assert_eq!(health.rag, HealthRag::Red);
    }

    #[test]
    fn test_input_is_not_reordered() {
        let project = ProjectBuilder::new()
            .id("p1")
            .add_checkin(Checkin::new(days_ago(50), RagStatus::Red).with_id("old"))
            .add_checkin(Checkin::new(days_ago(1), RagStatus::Green).with_id("new"))
            .build()
            .unwrap();
        let before = project.clone();

        let _ = calculate_health(&project, as_of());
        assert_eq!(project, before);
    }
}
