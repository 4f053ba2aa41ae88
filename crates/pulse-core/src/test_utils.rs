//! Test utilities for pulse-core
//!
//! Builders for in-memory diary snapshots. Snapshots are returned
//! most-recent-first, the same order the entry store hands them out.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::models::{DiaryEntry, SeverityLevel, Symptom};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
}

fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 15, 9, 0, 0).unwrap()
}

/// A single stored entry
pub fn entry(id: i64, date: &str, symptoms: &[Symptom], severity: SeverityLevel) -> DiaryEntry {
    DiaryEntry {
        id,
        date: date.to_string(),
        symptoms: symptoms.to_vec(),
        severity,
        notes: None,
        created_at: fixed_timestamp(),
    }
}

/// Build a snapshot from (symptoms, severity) pairs, newest first.
///
/// The first pair gets the highest id and the latest date; dates step back
/// one day per entry from the newest.
pub fn diary(specs: &[(&[Symptom], SeverityLevel)]) -> Vec<DiaryEntry> {
    let count = specs.len() as i64;
    specs
        .iter()
        .enumerate()
        .map(|(i, (symptoms, severity))| {
            let id = count - i as i64;
            let date = base_date() + Duration::days(id - 1);
            entry(id, &date.format("%Y-%m-%d").to_string(), symptoms, *severity)
        })
        .collect()
}

/// The three demo entries, newest first
pub fn sample_entries() -> Vec<DiaryEntry> {
    vec![
        DiaryEntry {
            notes: Some("Feeling tired, took rest today".to_string()),
            ..entry(
                3,
                "2024-11-14",
                &[Symptom::Fever, Symptom::Headache],
                SeverityLevel::Moderate,
            )
        },
        DiaryEntry {
            notes: Some("Slight headache in the evening".to_string()),
            ..entry(2, "2024-11-13", &[Symptom::Fatigue], SeverityLevel::Mild)
        },
        DiaryEntry {
            notes: Some("Dry cough, drinking warm water".to_string()),
            ..entry(1, "2024-11-12", &[Symptom::Cough], SeverityLevel::Mild)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diary_is_newest_first() {
        let entries = diary(&[
            (&[Symptom::Cough], SeverityLevel::Mild),
            (&[Symptom::Fever], SeverityLevel::Severe),
        ]);
        assert_eq!(entries[0].id, 2);
        assert_eq!(entries[0].date, "2024-11-02");
        assert_eq!(entries[1].id, 1);
        assert_eq!(entries[1].date, "2024-11-01");
    }
}
