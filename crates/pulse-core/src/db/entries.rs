//! Diary entry operations

use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::insights::SymptomStats;
use crate::models::{DiaryEntry, DiarySummary, NewDiaryEntry, SeverityLevel, Symptom};

const ENTRY_COLUMNS: &str = "id, date, symptoms, severity, notes, created_at";

/// Raw row before the JSON and enum columns are decoded
struct EntryRow {
    id: i64,
    date: String,
    symptoms: String,
    severity: String,
    notes: Option<String>,
    created_at: String,
}

impl EntryRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            symptoms: row.get(2)?,
            severity: row.get(3)?,
            notes: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn into_entry(self) -> Result<DiaryEntry> {
        let symptoms: Vec<Symptom> = serde_json::from_str(&self.symptoms)?;
        let severity: SeverityLevel = self.severity.parse().map_err(Error::InvalidData)?;

        Ok(DiaryEntry {
            id: self.id,
            date: self.date,
            symptoms,
            severity,
            notes: self.notes,
            created_at: parse_datetime(&self.created_at),
        })
    }
}

/// Demo diary, oldest first so the newest gets the highest id
fn demo_entries() -> Vec<NewDiaryEntry> {
    vec![
        NewDiaryEntry::new("2024-11-12", vec![Symptom::Cough], SeverityLevel::Mild)
            .with_notes("Dry cough, drinking warm water"),
        NewDiaryEntry::new("2024-11-13", vec![Symptom::Fatigue], SeverityLevel::Mild)
            .with_notes("Slight headache in the evening"),
        NewDiaryEntry::new(
            "2024-11-14",
            vec![Symptom::Fever, Symptom::Headache],
            SeverityLevel::Moderate,
        )
        .with_notes("Feeling tired, took rest today"),
    ]
}

impl Database {
    /// Validate and store a new entry, returning its id
    pub fn create_entry(&self, entry: &NewDiaryEntry) -> Result<i64> {
        let entry = entry.clone().normalized()?;
        let symptoms = serde_json::to_string(&entry.symptoms)?;

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO diary_entries (date, symptoms, severity, notes)
            VALUES (?, ?, ?, ?)
            "#,
            params![entry.date, symptoms, entry.severity.as_str(), entry.notes],
        )?;

        let id = conn.last_insert_rowid();
        info!(
            id,
            symptoms = entry.symptoms.len(),
            severity = entry.severity.as_str(),
            "Diary entry created"
        );
        Ok(id)
    }

    /// All entries, most recently added first
    pub fn list_entries(&self) -> Result<Vec<DiaryEntry>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM diary_entries ORDER BY id DESC",
            ENTRY_COLUMNS
        ))?;

        let rows = stmt
            .query_map([], EntryRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(EntryRow::into_entry).collect()
    }

    pub fn get_entry(&self, id: i64) -> Result<Option<DiaryEntry>> {
        let conn = self.conn()?;

        let row = conn
            .query_row(
                &format!("SELECT {} FROM diary_entries WHERE id = ?", ENTRY_COLUMNS),
                params![id],
                EntryRow::from_row,
            )
            .optional()?;

        row.map(EntryRow::into_entry).transpose()
    }

    /// Delete an entry. Returns false if it did not exist.
    pub fn delete_entry(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM diary_entries WHERE id = ?", params![id])?;
        if deleted > 0 {
            info!(id, "Diary entry deleted");
        }
        Ok(deleted > 0)
    }

    pub fn count_entries(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM diary_entries", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Totals shown above the diary
    pub fn get_diary_summary(&self) -> Result<DiarySummary> {
        let entries = self.list_entries()?;
        if entries.is_empty() {
            return Ok(DiarySummary {
                total_entries: 0,
                total_symptoms: 0,
                dominant_severity: None,
            });
        }

        let stats = SymptomStats::from_entries(&entries);
        Ok(DiarySummary {
            total_entries: stats.entry_count as i64,
            total_symptoms: stats.total_symptom_instances as i64,
            dominant_severity: Some(stats.dominant_severity),
        })
    }

    /// Load the three demo entries into an empty diary.
    ///
    /// Returns how many entries were added (zero if the diary already has data).
    pub fn seed_demo_entries(&self) -> Result<usize> {
        if self.count_entries()? > 0 {
            return Ok(0);
        }

        let demo = demo_entries();
        for entry in &demo {
            self.create_entry(entry)?;
        }
        info!(count = demo.len(), "Seeded demo diary entries");
        Ok(demo.len())
    }

    /// Delete every entry, returning how many were removed
    pub fn clear_entries(&self) -> Result<usize> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM diary_entries", [])?;
        info!(deleted, "Diary cleared");
        Ok(deleted)
    }
}
