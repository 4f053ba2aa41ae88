//! Database tests

use super::*;
use crate::error::Error;
use crate::models::*;

#[test]
fn test_in_memory_db() {
    let db = Database::in_memory().unwrap();
    assert!(db.list_entries().unwrap().is_empty());
    assert_eq!(db.count_entries().unwrap(), 0);
}

#[test]
fn test_schema_exists() {
    let db = Database::in_memory().unwrap();
    let conn = db.conn().unwrap();

    let result: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('diary_entries') WHERE name IN ('id', 'date', 'symptoms', 'severity', 'notes', 'created_at')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 6, "diary_entries should have 6 expected columns");

    let result: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('audit_log')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 7);
}

#[test]
fn test_entry_crud() {
    let db = Database::in_memory().unwrap();

    let new = NewDiaryEntry::new(
        "2024-11-14",
        vec![Symptom::SoreThroat, Symptom::Fever],
        SeverityLevel::Severe,
    )
    .with_notes("Could not sleep");
    let id = db.create_entry(&new).unwrap();
    assert!(id > 0);

    let entry = db.get_entry(id).unwrap().unwrap();
    assert_eq!(entry.date, "2024-11-14");
    assert_eq!(entry.symptoms, vec![Symptom::SoreThroat, Symptom::Fever]);
    assert_eq!(entry.severity, SeverityLevel::Severe);
    assert_eq!(entry.notes.as_deref(), Some("Could not sleep"));

    assert!(db.delete_entry(id).unwrap());
    assert!(!db.delete_entry(id).unwrap());
    assert!(db.get_entry(id).unwrap().is_none());
}

#[test]
fn test_create_entry_rejects_invalid() {
    let db = Database::in_memory().unwrap();

    let no_symptoms = NewDiaryEntry::new("2024-11-14", vec![], SeverityLevel::Mild);
    assert!(matches!(
        db.create_entry(&no_symptoms),
        Err(Error::InvalidData(_))
    ));

    let no_date = NewDiaryEntry::new("  ", vec![Symptom::Cough], SeverityLevel::Mild);
    assert!(matches!(db.create_entry(&no_date), Err(Error::InvalidData(_))));

    assert_eq!(db.count_entries().unwrap(), 0);
}

#[test]
fn test_create_entry_normalizes() {
    let db = Database::in_memory().unwrap();

    let new = NewDiaryEntry::new(
        " 2024-11-14 ",
        vec![Symptom::Cough, Symptom::Cough, Symptom::Nausea],
        SeverityLevel::Mild,
    )
    .with_notes("   ");
    let id = db.create_entry(&new).unwrap();

    let entry = db.get_entry(id).unwrap().unwrap();
    assert_eq!(entry.date, "2024-11-14");
    assert_eq!(entry.symptoms, vec![Symptom::Cough, Symptom::Nausea]);
    assert!(entry.notes.is_none());
}

#[test]
fn test_list_entries_most_recent_first() {
    let db = Database::in_memory().unwrap();

    // Inserted out of date order; listing follows insertion, newest first
    db.create_entry(&NewDiaryEntry::new("2024-11-10", vec![Symptom::Cough], SeverityLevel::Mild))
        .unwrap();
    db.create_entry(&NewDiaryEntry::new("2024-11-01", vec![Symptom::Fever], SeverityLevel::Mild))
        .unwrap();
    let last = db
        .create_entry(&NewDiaryEntry::new("2024-11-05", vec![Symptom::Nausea], SeverityLevel::Mild))
        .unwrap();

    let entries = db.list_entries().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].id, last);
    assert_eq!(entries[0].date, "2024-11-05");
    assert_eq!(entries[2].date, "2024-11-10");
}

#[test]
fn test_diary_summary() {
    let db = Database::in_memory().unwrap();

    let empty = db.get_diary_summary().unwrap();
    assert_eq!(empty.total_entries, 0);
    assert_eq!(empty.total_symptoms, 0);
    assert!(empty.dominant_severity.is_none());

    db.create_entry(&NewDiaryEntry::new(
        "2024-11-01",
        vec![Symptom::Cough, Symptom::Fever],
        SeverityLevel::Severe,
    ))
    .unwrap();
    db.create_entry(&NewDiaryEntry::new(
        "2024-11-02",
        vec![Symptom::Headache],
        SeverityLevel::Severe,
    ))
    .unwrap();
    db.create_entry(&NewDiaryEntry::new("2024-11-03", vec![Symptom::Cough], SeverityLevel::Mild))
        .unwrap();

    let summary = db.get_diary_summary().unwrap();
    assert_eq!(summary.total_entries, 3);
    assert_eq!(summary.total_symptoms, 4);
    assert_eq!(summary.dominant_severity, Some(SeverityLevel::Severe));
}

#[test]
fn test_seed_and_clear() {
    let db = Database::in_memory().unwrap();

    assert_eq!(db.seed_demo_entries().unwrap(), 3);
    // Seeding only fills an empty diary
    assert_eq!(db.seed_demo_entries().unwrap(), 0);

    let entries = db.list_entries().unwrap();
    assert_eq!(entries[0].date, "2024-11-14");
    assert_eq!(entries[0].symptoms, vec![Symptom::Fever, Symptom::Headache]);
    assert_eq!(entries[2].date, "2024-11-12");

    assert_eq!(db.clear_entries().unwrap(), 3);
    assert_eq!(db.count_entries().unwrap(), 0);
}

#[test]
fn test_reminder_crud() {
    let db = Database::in_memory().unwrap();

    let id = db
        .create_reminder(&NewReminder::new("Vitamin D", "9:00", ReminderFrequency::Daily))
        .unwrap();
    let reminder = db.get_reminder(id).unwrap().unwrap();
    assert_eq!(reminder.name, "Vitamin D");
    assert_eq!(reminder.time, "09:00");
    assert_eq!(reminder.frequency, ReminderFrequency::Daily);
    assert!(reminder.enabled);

    let toggled = db.toggle_reminder(id).unwrap();
    assert!(!toggled.enabled);
    assert!(!db.get_reminder(id).unwrap().unwrap().enabled);

    assert!(db.set_reminder_enabled(id, true).unwrap());
    assert!(db.get_reminder(id).unwrap().unwrap().enabled);
    assert!(!db.set_reminder_enabled(999, true).unwrap());
    assert!(matches!(db.toggle_reminder(999), Err(Error::NotFound(_))));

    assert!(db.delete_reminder(id).unwrap());
    assert!(!db.delete_reminder(id).unwrap());
    assert!(db.list_reminders().unwrap().is_empty());
}

#[test]
fn test_create_reminder_rejects_invalid() {
    let db = Database::in_memory().unwrap();

    let no_name = NewReminder::new(" ", "09:00", ReminderFrequency::Weekly);
    assert!(matches!(db.create_reminder(&no_name), Err(Error::InvalidData(_))));

    let bad_time = NewReminder::new("Iron", "9am", ReminderFrequency::Weekly);
    assert!(matches!(db.create_reminder(&bad_time), Err(Error::InvalidData(_))));

    assert!(db.list_reminders().unwrap().is_empty());
}

#[test]
fn test_seed_demo_reminders() {
    let db = Database::in_memory().unwrap();

    assert_eq!(db.seed_demo_reminders().unwrap(), 2);
    assert_eq!(db.seed_demo_reminders().unwrap(), 0);

    let reminders = db.list_reminders().unwrap();
    assert_eq!(reminders[0].name, "Vitamin D");
    assert!(reminders[0].enabled);
    assert_eq!(reminders[1].frequency, ReminderFrequency::AsNeeded);
    assert!(!reminders[1].enabled);
}

#[test]
fn test_community_reports() {
    let db = Database::in_memory().unwrap();

    db.create_report(&NewCommunityReport::new(
        "Jayanagar",
        vec![Symptom::Fever, Symptom::Cough],
        SeverityLevel::Moderate,
    ))
    .unwrap();
    let latest = db
        .create_report(
            &NewCommunityReport::new("whitefield", vec![Symptom::Fatigue], SeverityLevel::Mild)
                .with_notes("Whole office is tired"),
        )
        .unwrap();

    let all = db.list_reports(None, 100).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, latest);
    assert_eq!(all[0].ward, "Whitefield");
    assert_eq!(all[0].notes.as_deref(), Some("Whole office is tired"));

    let ward = db.list_reports(Some("jayanagar"), 100).unwrap();
    assert_eq!(ward.len(), 1);
    assert_eq!(ward[0].symptoms, vec![Symptom::Fever, Symptom::Cough]);

    assert_eq!(db.list_reports(None, 1).unwrap().len(), 1);
    assert_eq!(db.get_report(latest).unwrap().unwrap().symptoms, vec![Symptom::Fatigue]);
    assert!(db.get_report(999).unwrap().is_none());

    let bad = NewCommunityReport::new("Jayanagar", vec![Symptom::Dizziness], SeverityLevel::Mild);
    assert!(matches!(db.create_report(&bad), Err(Error::InvalidData(_))));
}

#[test]
fn test_audit_log() {
    let db = Database::in_memory().unwrap();

    db.log_audit("local-dev", "create_entry", Some("diary_entry"), Some(1), None)
        .unwrap();
    db.log_audit("local-dev", "generate_insights", None, None, Some("entries=1"))
        .unwrap();

    let log = db.list_audit_log(10).unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].action, "generate_insights");
    assert_eq!(log[0].details.as_deref(), Some("entries=1"));
    assert_eq!(log[1].entity_id, Some(1));

    assert_eq!(db.list_audit_log(1).unwrap().len(), 1);
}

#[test]
fn test_encrypted_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diary.db");
    let path = path.to_str().unwrap();

    {
        let db = Database::new_with_key(path, Some("correct horse")).unwrap();
        db.seed_demo_entries().unwrap();
    }

    let db = Database::new_with_key(path, Some("correct horse")).unwrap();
    assert_eq!(db.count_entries().unwrap(), 3);

    assert!(Database::new_with_key(path, Some("wrong passphrase")).is_err());
}

#[test]
fn test_is_encrypted() {
    let dir = tempfile::tempdir().unwrap();

    let plain = dir.path().join("plain.db");
    let db = Database::new_unencrypted(plain.to_str().unwrap()).unwrap();
    assert!(!db.is_encrypted().unwrap());

    let keyed = dir.path().join("keyed.db");
    let db = Database::new_with_key(keyed.to_str().unwrap(), Some("correct horse")).unwrap();
    assert!(db.is_encrypted().unwrap());

    assert!(!Database::in_memory().unwrap().is_encrypted().unwrap());
}
