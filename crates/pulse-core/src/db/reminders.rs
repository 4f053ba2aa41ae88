//! Medicine reminder operations

use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewReminder, Reminder, ReminderFrequency};

const REMINDER_COLUMNS: &str = "id, name, time, frequency, enabled, created_at";

/// Raw row before the frequency column is decoded
struct ReminderRow {
    id: i64,
    name: String,
    time: String,
    frequency: String,
    enabled: bool,
    created_at: String,
}

impl ReminderRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            time: row.get(2)?,
            frequency: row.get(3)?,
            enabled: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn into_reminder(self) -> Result<Reminder> {
        let frequency: ReminderFrequency = self.frequency.parse().map_err(Error::InvalidData)?;

        Ok(Reminder {
            id: self.id,
            name: self.name,
            time: self.time,
            frequency,
            enabled: self.enabled,
            created_at: parse_datetime(&self.created_at),
        })
    }
}

impl Database {
    /// Validate and store a reminder, enabled, returning its id
    pub fn create_reminder(&self, reminder: &NewReminder) -> Result<i64> {
        let reminder = reminder.clone().normalized()?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO reminders (name, time, frequency, enabled) VALUES (?, ?, ?, 1)",
            params![reminder.name, reminder.time, reminder.frequency.as_str()],
        )?;

        let id = conn.last_insert_rowid();
        info!(id, frequency = reminder.frequency.as_str(), "Reminder created");
        Ok(id)
    }

    /// All reminders in the order they were added
    pub fn list_reminders(&self) -> Result<Vec<Reminder>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM reminders ORDER BY id",
            REMINDER_COLUMNS
        ))?;

        let rows = stmt
            .query_map([], ReminderRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(ReminderRow::into_reminder).collect()
    }

    pub fn get_reminder(&self, id: i64) -> Result<Option<Reminder>> {
        let conn = self.conn()?;

        let row = conn
            .query_row(
                &format!("SELECT {} FROM reminders WHERE id = ?", REMINDER_COLUMNS),
                params![id],
                ReminderRow::from_row,
            )
            .optional()?;

        row.map(ReminderRow::into_reminder).transpose()
    }

    /// Turn a reminder on or off. Returns false if it did not exist.
    pub fn set_reminder_enabled(&self, id: i64, enabled: bool) -> Result<bool> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE reminders SET enabled = ? WHERE id = ?",
            params![enabled, id],
        )?;
        Ok(updated > 0)
    }

    /// Flip a reminder's enabled flag, returning the updated reminder
    pub fn toggle_reminder(&self, id: i64) -> Result<Reminder> {
        let reminder = self
            .get_reminder(id)?
            .ok_or_else(|| Error::NotFound(format!("Reminder {} not found", id)))?;

        self.set_reminder_enabled(id, !reminder.enabled)?;
        info!(id, enabled = !reminder.enabled, "Reminder toggled");

        Ok(Reminder {
            enabled: !reminder.enabled,
            ..reminder
        })
    }

    /// Load the two demo reminders into an empty list.
    ///
    /// The second one starts disabled. Returns how many were added.
    pub fn seed_demo_reminders(&self) -> Result<usize> {
        if !self.list_reminders()?.is_empty() {
            return Ok(0);
        }

        self.create_reminder(&NewReminder::new(
            "Vitamin D",
            "09:00",
            ReminderFrequency::Daily,
        ))?;
        let id = self.create_reminder(&NewReminder::new(
            "Pain Reliever",
            "20:00",
            ReminderFrequency::AsNeeded,
        ))?;
        self.set_reminder_enabled(id, false)?;

        Ok(2)
    }

    /// Delete a reminder. Returns false if it did not exist.
    pub fn delete_reminder(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM reminders WHERE id = ?", params![id])?;
        if deleted > 0 {
            info!(id, "Reminder deleted");
        }
        Ok(deleted > 0)
    }
}
