//! Enrollments: time-bounded affiliations between identities and organizations.

use crate::error::{ValidationError, ValidationResult};
use crate::model::OrganizationName;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Lower bound used when an enrollment has no explicit start date.
pub fn default_enrollment_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0)
        .single()
        .expect("1900-01-01T00:00:00Z is a representable timestamp")
}

/// Upper bound used when an enrollment has no explicit end date.
pub fn default_enrollment_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0)
        .single()
        .expect("2100-01-01T00:00:00Z is a representable timestamp")
}

/// A time-bounded affiliation between a unique identity and an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// uuid of the enrolled unique identity
    pub uuid: String,
    pub organization: OrganizationName,
    #[serde(with = "utc_datetime")]
    pub start: DateTime<Utc>,
    #[serde(with = "utc_datetime")]
    pub end: DateTime<Utc>,
}

impl Enrollment {
    /// Create an enrollment with explicit bounds, rejecting inverted periods.
    pub fn new(
        uuid: String,
        organization: OrganizationName,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        if start > end {
            return Err(ValidationError::InvalidPeriod);
        }
        Ok(Self {
            uuid,
            organization,
            start,
            end,
        })
    }

    /// Create an enrollment spanning the default open-ended period.
    pub fn unbounded(uuid: String, organization: OrganizationName) -> Self {
        Self {
            uuid,
            organization,
            start: default_enrollment_start(),
            end: default_enrollment_end(),
        }
    }
}

/// Serde adapter rendering timestamps as ISO-8601 with an explicit UTC
/// offset (`1999-01-01T00:00:00+00:00`) rather than the `Z` suffix.
pub mod utc_datetime {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrganizationName;

    fn org(name: &str) -> OrganizationName {
        OrganizationName::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_unbounded_enrollment_uses_defaults() {
        let enrollment = Enrollment::unbounded("AAAA".to_string(), org("Example"));
        assert_eq!(enrollment.start, default_enrollment_start());
        assert_eq!(enrollment.end, default_enrollment_end());
    }

    #[test]
    fn test_inverted_period_rejected() {
        let start = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        let error = Enrollment::new("AAAA".to_string(), org("Example"), start, end).unwrap_err();
        assert_eq!(
            error.to_string(),
            "'start' date cannot be greater than 'end' date"
        );
    }

    #[test]
    fn test_timestamps_serialize_with_utc_offset() {
        let start = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let enrollment =
            Enrollment::new("AAAA".to_string(), org("Bitergia"), start, end).unwrap();

        let value = serde_json::to_value(&enrollment).unwrap();
        assert_eq!(value["start"], "1999-01-01T00:00:00+00:00");
        assert_eq!(value["end"], "2000-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_timestamps_round_trip() {
        let enrollment = Enrollment::unbounded("AAAA".to_string(), org("Example"));
        let raw = serde_json::to_string(&enrollment).unwrap();
        let back: Enrollment = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, enrollment);
    }
}
