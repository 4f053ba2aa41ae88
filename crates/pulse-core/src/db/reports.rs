//! Community symptom report operations

use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{CommunityReport, NewCommunityReport, SeverityLevel, Symptom};

const REPORT_COLUMNS: &str = "id, ward, symptoms, severity, notes, created_at";

struct ReportRow {
    id: i64,
    ward: String,
    symptoms: String,
    severity: String,
    notes: Option<String>,
    created_at: String,
}

impl ReportRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            ward: row.get(1)?,
            symptoms: row.get(2)?,
            severity: row.get(3)?,
            notes: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn into_report(self) -> Result<CommunityReport> {
        let symptoms: Vec<Symptom> = serde_json::from_str(&self.symptoms)?;
        let severity: SeverityLevel = self.severity.parse().map_err(Error::InvalidData)?;

        Ok(CommunityReport {
            id: self.id,
            ward: self.ward,
            symptoms,
            severity,
            notes: self.notes,
            created_at: parse_datetime(&self.created_at),
        })
    }
}

impl Database {
    /// Validate and store an anonymous community report, returning its id
    pub fn create_report(&self, report: &NewCommunityReport) -> Result<i64> {
        let report = report.clone().normalized()?;
        let symptoms = serde_json::to_string(&report.symptoms)?;

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO community_reports (ward, symptoms, severity, notes)
            VALUES (?, ?, ?, ?)
            "#,
            params![report.ward, symptoms, report.severity.as_str(), report.notes],
        )?;

        let id = conn.last_insert_rowid();
        info!(id, ward = %report.ward, "Community report submitted");
        Ok(id)
    }

    pub fn get_report(&self, id: i64) -> Result<Option<CommunityReport>> {
        let conn = self.conn()?;

        let row = conn
            .query_row(
                &format!(
                    "SELECT {} FROM community_reports WHERE id = ?",
                    REPORT_COLUMNS
                ),
                params![id],
                ReportRow::from_row,
            )
            .optional()?;

        row.map(ReportRow::into_report).transpose()
    }

    /// Community reports, newest first, optionally for one ward (any case)
    pub fn list_reports(&self, ward: Option<&str>, limit: i64) -> Result<Vec<CommunityReport>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {}
            FROM community_reports
            WHERE (?1 IS NULL OR ward = ?1 COLLATE NOCASE)
            ORDER BY id DESC
            LIMIT ?2
            "#,
            REPORT_COLUMNS
        ))?;

        let rows = stmt
            .query_map(params![ward, limit], ReportRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(ReportRow::into_report).collect()
    }
}
