//! Timestamp parsing for snapshot fields.
//!
//! Relational stores hand back `date` columns as `YYYY-MM-DD` and
//! `timestamptz` columns as RFC 3339. Both land here as `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{CoreError, CoreResult};

/// Parses a snapshot timestamp.
///
/// Accepted forms, in order:
/// - RFC 3339 (`2025-01-15T10:30:00Z`, `2025-01-15T10:30:00.123+00:00`)
/// - naive date-time, read as UTC (`2025-01-15T10:30:00`, `2025-01-15 10:30:00.5`)
/// - bare date, read as UTC midnight (`2025-01-15`)
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` if none of the forms match.
pub fn parse_timestamp(field: &str, raw: &str) -> CoreResult<DateTime<Utc>> {
    let value = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(CoreError::invalid_timestamp(field, raw))
}

/// Serde adapter for required timestamp fields.
pub mod flexible {
    use super::*;

    /// Serializes as RFC 3339.
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    /// Deserializes any form accepted by [`parse_timestamp`].
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp("timestamp", &raw).map_err(serde::de::Error::custom)
    }
}

/// Deserializes a collection that may be missing or `null` as empty.
pub fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
