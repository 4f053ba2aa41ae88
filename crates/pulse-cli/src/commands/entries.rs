//! Diary entry command implementations

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use pulse_core::db::Database;
use pulse_core::models::{NewDiaryEntry, SeverityLevel, Symptom};

use super::truncate;

/// Parse symptom names, keeping the order given
pub fn parse_symptoms(raw: &[String]) -> Result<Vec<Symptom>> {
    raw.iter()
        .map(|s| s.parse::<Symptom>().map_err(anyhow::Error::msg))
        .collect()
}

/// Resolve the entry date, defaulting to today
pub fn resolve_date(date: Option<&str>) -> Result<String> {
    match date {
        Some(d) => {
            let parsed = NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", d))?;
            Ok(parsed.format("%Y-%m-%d").to_string())
        }
        None => Ok(Local::now().date_naive().format("%Y-%m-%d").to_string()),
    }
}

pub fn cmd_entries_add(
    db: &Database,
    symptoms: &[String],
    date: Option<&str>,
    severity: &str,
    notes: Option<&str>,
) -> Result<()> {
    if symptoms.is_empty() {
        bail!("Please select at least one symptom");
    }

    let symptoms = parse_symptoms(symptoms)?;
    let severity: SeverityLevel = severity.parse().map_err(anyhow::Error::msg)?;
    let date = resolve_date(date)?;

    let mut entry = NewDiaryEntry::new(date, symptoms, severity);
    if let Some(notes) = notes {
        entry = entry.with_notes(notes);
    }

    let id = db.create_entry(&entry)?;
    println!("✅ Logged entry #{} for {}", id, entry.date);

    Ok(())
}

pub fn cmd_entries_list(db: &Database) -> Result<()> {
    let entries = db.list_entries()?;

    if entries.is_empty() {
        println!("No diary entries yet. Log one with:");
        println!("  pulse add --symptom Fever --severity mild");
        return Ok(());
    }

    println!();
    println!("📔 Diary Entries");
    println!("   ─────────────────────────────────────────────────────────────");

    for entry in entries {
        let symptoms = entry
            .symptoms
            .iter()
            .map(Symptom::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "   #{:<4} {} │ {:<8} │ {}",
            entry.id,
            entry.date,
            entry.severity,
            truncate(&symptoms, 40)
        );
        if let Some(notes) = entry.notes {
            println!("          {}", truncate(&notes, 60));
        }
    }

    Ok(())
}

pub fn cmd_entries_delete(db: &Database, id: i64) -> Result<()> {
    if db.delete_entry(id)? {
        println!("🗑️  Deleted entry #{}", id);
    } else {
        bail!("Entry #{} not found", id);
    }
    Ok(())
}
