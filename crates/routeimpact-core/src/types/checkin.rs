//! Check-ins and the KPI updates they carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::RagStatus;
use super::timestamp::{flexible, nullable_vec};
use crate::ids::IndicatorId;

/// A periodic progress report for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkin {
    /// Row identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Reporting date.
    #[serde(with = "flexible")]
    pub date: DateTime<Utc>,
    /// Overall status reported for the period.
    pub overall_status: RagStatus,
    /// Free-text period name such as "Q1 2025".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_label: Option<String>,
    /// Narrative notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Indicator readings submitted with this check-in.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub kpi_updates: Vec<KpiUpdate>,
}

impl Checkin {
    /// Creates a check-in with no KPI updates.
    #[must_use]
    pub fn new(date: DateTime<Utc>, overall_status: RagStatus) -> Self {
        Self {
            id: None,
            date,
            overall_status,
            period_label: None,
            notes: None,
            kpi_updates: Vec::new(),
        }
    }

    /// Sets the row identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the period label.
    #[must_use]
    pub fn with_period_label(mut self, label: impl Into<String>) -> Self {
        self.period_label = Some(label.into());
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Adds a KPI update.
    #[must_use]
    pub fn with_update(mut self, update: KpiUpdate) -> Self {
        self.kpi_updates.push(update);
        self
    }

    /// Adds several KPI updates.
    #[must_use]
    pub fn with_updates(mut self, updates: impl IntoIterator<Item = KpiUpdate>) -> Self {
        self.kpi_updates.extend(updates);
        self
    }
}

/// A single indicator reading inside a check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiUpdate {
    /// Row identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Indicator this reading belongs to.
    pub indicator_id: IndicatorId,
    /// Measured value; `None` when only a status was reported.
    #[serde(default)]
    pub value: Option<f64>,
    /// Reported status.
    pub status: RagStatus,
    /// Reporter's comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Creation time; the newest update per indicator is the current reading.
    #[serde(with = "flexible")]
    pub created_at: DateTime<Utc>,
}

impl KpiUpdate {
    /// Creates a status-only update.
    #[must_use]
    pub fn new(
        indicator_id: impl Into<IndicatorId>,
        status: RagStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            indicator_id: indicator_id.into(),
            value: None,
            status,
            comment: None,
            created_at,
        }
    }

    /// Sets the row identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the measured value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_database_row() {
        let json = r#"{
            "id": "c1",
            "project_id": "p1",
            "date": "2025-02-01",
            "overall_status": "AMBER",
            "period_label": "Jan 2025",
            "kpi_updates": [
                {"indicator_id": "i1", "value": null, "status": "RED",
                 "created_at": "2025-02-01T09:00:00.000+00:00"}
            ]
        }"#;
        let checkin: Checkin = serde_json::from_str(json).unwrap();
        assert_eq!(checkin.overall_status, RagStatus::Amber);
        assert_eq!(
            checkin.date,
            Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(checkin.kpi_updates.len(), 1);
        assert!(checkin.kpi_updates[0].value.is_none());
    }

    #[test]
    fn test_null_updates_become_empty() {
        let json = r#"{"date":"2025-02-01","overall_status":"GREEN","kpi_updates":null}"#;
        let checkin: Checkin = serde_json::from_str(json).unwrap();
        assert!(checkin.kpi_updates.is_empty());

        let json = r#"{"date":"2025-02-01","overall_status":"GREEN"}"#;
        let checkin: Checkin = serde_json::from_str(json).unwrap();
        assert!(checkin.kpi_updates.is_empty());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let json = r#"{"date":"soon","overall_status":"GREEN"}"#;
        assert!(serde_json::from_str::<Checkin>(json).is_err());
    }
}
