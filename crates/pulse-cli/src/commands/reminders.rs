//! Medicine reminder command implementations

use anyhow::{bail, Result};
use pulse_core::db::Database;
use pulse_core::models::{NewReminder, ReminderFrequency};

use super::truncate;

pub fn cmd_reminders_add(db: &Database, name: &str, time: &str, frequency: &str) -> Result<()> {
    let frequency: ReminderFrequency = frequency.parse().map_err(anyhow::Error::msg)?;

    let id = db.create_reminder(&NewReminder::new(name, time, frequency))?;
    if let Some(reminder) = db.get_reminder(id)? {
        println!(
            "✅ Added reminder #{}: {} at {} ({})",
            id, reminder.name, reminder.time, reminder.frequency
        );
    }

    Ok(())
}

pub fn cmd_reminders_list(db: &Database) -> Result<()> {
    let reminders = db.list_reminders()?;

    if reminders.is_empty() {
        println!("No reminders yet. Add one with:");
        println!("  pulse reminder add \"Vitamin D\" --time 09:00 --frequency daily");
        return Ok(());
    }

    println!();
    println!("💊 Medicine Reminders");
    println!("   ─────────────────────────────────────────────────────────────");

    for reminder in reminders {
        let status = if reminder.enabled { "on " } else { "off" };
        println!(
            "   #{:<4} [{}] {} │ {:<9} │ {}",
            reminder.id,
            status,
            reminder.time,
            reminder.frequency,
            truncate(&reminder.name, 40)
        );
    }

    Ok(())
}

pub fn cmd_reminders_toggle(db: &Database, id: i64) -> Result<()> {
    let reminder = db.toggle_reminder(id)?;
    let state = if reminder.enabled { "enabled" } else { "disabled" };
    println!("🔔 Reminder #{} ({}) {}", id, reminder.name, state);
    Ok(())
}

pub fn cmd_reminders_delete(db: &Database, id: i64) -> Result<()> {
    if db.delete_reminder(id)? {
        println!("🗑️  Deleted reminder #{}", id);
    } else {
        bail!("Reminder #{} not found", id);
    }
    Ok(())
}
