use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

use std::fmt::Display;

use super::SessionError;

/// The time period for which a batch of coding sessions has been aggregated.
/// On the wire this is an integer tag; anything outside 0..=3 is rejected
/// while constructing the value, so no fetch ever runs for a bad period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl From<Period> for u8 {
    fn from(value: Period) -> Self {
        match value {
            Period::Day => 0,
            Period::Week => 1,
            Period::Month => 2,
            Period::Year => 3,
        }
    }
}

impl TryFrom<u8> for Period {
    type Error = SessionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Period::Day),
            1 => Ok(Period::Week),
            2 => Ok(Period::Month),
            3 => Ok(Period::Year),
            other => Err(SessionError::InvalidPeriod(other)),
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Day => write!(f, "day"),
            Period::Week => write!(f, "week"),
            Period::Month => write!(f, "month"),
            Period::Year => write!(f, "year"),
        }
    }
}

/// One coding session, already summarized at the storage layer for a given
/// [Period]. The duration fields are trusted as-is: aggregation sums them
/// without checking that nested durations add up to the reported totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodingSession {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub period: Period,
    #[serde(rename = "date")]
    pub epoch_date_ms: i64,
    pub date_string: String,
    pub total_time_ms: i64,
    pub repositories: Vec<Repository>,
}

impl CodingSession {
    /// The session date as a proper timestamp. The epoch field is stored in
    /// milliseconds.
    pub fn date(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.epoch_date_ms)
            .single()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub files: Vec<File>,
    pub duration_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub path: String,
    pub filetype: String,
    pub duration_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::{CodingSession, Period};
    use crate::session::SessionError;

    #[test]
    fn period_round_trips_through_wire_tag() {
        for period in [Period::Day, Period::Week, Period::Month, Period::Year] {
            let tag = u8::from(period);
            assert_eq!(Period::try_from(tag).unwrap(), period);
        }
    }

    #[test]
    fn out_of_range_period_is_rejected() {
        let err = Period::try_from(4).unwrap_err();
        assert!(matches!(err, SessionError::InvalidPeriod(4)));
    }

    #[test]
    fn session_decodes_from_storage_document() {
        let doc = serde_json::json!({
            "_id": "65a1",
            "period": 0,
            "date": 1_704_067_200_000_i64,
            "date_string": "2024-01-01",
            "total_time_ms": 3_600_000,
            "repositories": [
                {
                    "name": "codestats",
                    "duration_ms": 3_600_000,
                    "files": [
                        {
                            "name": "main.go",
                            "path": "cmd/main.go",
                            "filetype": "go",
                            "duration_ms": 3_600_000
                        }
                    ]
                }
            ]
        });

        let session: CodingSession = serde_json::from_value(doc).unwrap();
        assert_eq!(session.id, "65a1");
        assert_eq!(session.period, Period::Day);
        assert_eq!(session.date_string, "2024-01-01");
        assert_eq!(session.repositories[0].files[0].filetype, "go");
        assert_eq!(session.date().to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn document_without_id_still_decodes() {
        let doc = serde_json::json!({
            "period": 1,
            "date": 0,
            "date_string": "2024-w01",
            "total_time_ms": 0,
            "repositories": []
        });

        let session: CodingSession = serde_json::from_value(doc).unwrap();
        assert_eq!(session.id, "");
        assert_eq!(session.period, Period::Week);
    }

    #[test]
    fn document_with_bad_period_fails_to_decode() {
        let doc = serde_json::json!({
            "period": 9,
            "date": 0,
            "date_string": "x",
            "total_time_ms": 0,
            "repositories": []
        });

        assert!(serde_json::from_value::<CodingSession>(doc).is_err());
    }
}
