use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::patient::Party;
use crate::dates::parse_timestamp;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub doctor: Option<Party>,
}

impl MedicalRecord {
    pub fn doctor_name(&self) -> Option<&str> {
        self.doctor.as_ref()?.name()
    }

    fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// Number of distinct named doctors across the records.
pub fn distinct_doctors(records: &[MedicalRecord]) -> usize {
    records
        .iter()
        .filter_map(MedicalRecord::doctor_name)
        .collect::<HashSet<_>>()
        .len()
}

/// Records created strictly after `now - 30 days`. Unparseable dates are skipped.
pub fn created_in_last_30_days(records: &[MedicalRecord], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::days(30);
    records
        .iter()
        .filter(|r| r.created().is_some_and(|c| c > cutoff))
        .count()
}

/// Input for `createRecord`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub patient_id: String,
    pub title: String,
    pub content: String,
    pub diagnosis: String,
    pub treatment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, doctor: Option<&str>, created_at: Option<&str>) -> MedicalRecord {
        let json = serde_json::json!({
            "id": id,
            "title": format!("Record {id}"),
            "createdAt": created_at,
            "doctor": doctor.map(|d| serde_json::json!({"user": {"name": d}})),
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_distinct_doctors() {
        let records = vec![
            record("1", Some("House"), None),
            record("2", Some("House"), None),
            record("3", Some("Grey"), None),
            record("4", None, None),
        ];
        assert_eq!(distinct_doctors(&records), 2);
    }

    #[test]
    fn test_created_in_last_30_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let records = vec![
            record("1", None, Some("2024-03-30T08:00:00Z")),
            record("2", None, Some("2024-03-02T08:00:00Z")),
            record("3", None, Some("2024-01-15")),
            record("4", None, Some("garbage")),
            record("5", None, None),
        ];
        assert_eq!(created_in_last_30_days(&records, now), 2);
    }

    #[test]
    fn test_new_record_serializes_camel_case() {
        let input = NewRecord {
            patient_id: "p1".into(),
            title: "Annual checkup".into(),
            content: String::new(),
            diagnosis: "Healthy".into(),
            treatment: String::new(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["patientId"], "p1");
        assert_eq!(json["diagnosis"], "Healthy");
    }
}
