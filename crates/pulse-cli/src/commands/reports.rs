//! Community report command implementations

use anyhow::Result;
use pulse_core::db::Database;
use pulse_core::models::{NewCommunityReport, SeverityLevel, Symptom, WARDS};

use super::{parse_symptoms, truncate};

pub fn cmd_reports_submit(
    db: &Database,
    ward: &str,
    symptoms: &[String],
    severity: &str,
    notes: Option<&str>,
) -> Result<()> {
    let symptoms = parse_symptoms(symptoms)?;
    let severity: SeverityLevel = severity.parse().map_err(anyhow::Error::msg)?;

    let mut report = NewCommunityReport::new(ward, symptoms, severity);
    if let Some(notes) = notes {
        report = report.with_notes(notes);
    }

    match db.create_report(&report) {
        Ok(id) => {
            println!("✅ Report #{} submitted. Thank you for keeping your community informed.", id);
            Ok(())
        }
        Err(pulse_core::Error::InvalidData(msg)) => {
            anyhow::bail!("{}\n   Wards: {}", msg, WARDS.join(", "))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn cmd_reports_list(db: &Database, ward: Option<&str>, limit: i64) -> Result<()> {
    let reports = db.list_reports(ward, limit.clamp(1, 1000))?;

    if reports.is_empty() {
        println!("No community reports yet. Submit one with:");
        println!("  pulse report submit --ward Jayanagar --symptom Fever");
        return Ok(());
    }

    println!();
    println!("🗺️  Community Reports");
    println!("   ─────────────────────────────────────────────────────────────");

    for report in reports {
        let symptoms = report
            .symptoms
            .iter()
            .map(Symptom::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "   #{:<4} {:<15} │ {:<8} │ {}",
            report.id,
            report.ward,
            report.severity,
            truncate(&symptoms, 35)
        );
    }

    Ok(())
}
