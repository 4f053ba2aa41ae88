//! Summary and insight command implementations

use std::sync::Arc;

use anyhow::Result;
use pulse_core::db::Database;
use pulse_core::insights::{delay_from_env, AnalysisDelay, InsightRunner, NoDelay};
use pulse_core::{Error, InsightReport};

pub fn cmd_summary(db: &Database) -> Result<()> {
    let summary = db.get_diary_summary()?;

    println!();
    println!("📊 Diary Summary");
    println!("   ─────────────────────────────");
    println!("   Total entries:   {}", summary.total_entries);
    println!("   Total symptoms:  {}", summary.total_symptoms);
    match summary.dominant_severity {
        Some(level) => println!("   Usual severity:  {}", level),
        None => println!("   Usual severity:  -"),
    }
    println!();

    Ok(())
}

/// Pick the analysis delay: none with --no-delay, otherwise from the environment
pub fn analysis_delay(no_delay: bool) -> Arc<dyn AnalysisDelay> {
    if no_delay {
        Arc::new(NoDelay)
    } else {
        Arc::from(delay_from_env())
    }
}

pub async fn cmd_insights(db: &Database, no_delay: bool, json: bool) -> Result<()> {
    let entries = db.list_entries()?;
    let runner = Arc::new(InsightRunner::new(analysis_delay(no_delay)));

    if !json && !entries.is_empty() {
        println!("🔍 Analyzing your health data...");
    }

    let report = match runner.generate(entries).await {
        Ok(report) => report,
        Err(Error::NothingToAnalyze) => {
            println!("{}", Error::NothingToAnalyze);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &InsightReport) {
    println!();
    println!("💡 Health Insights");
    println!("   ─────────────────────────────────────────────────────────────");
    for (i, statement) in report.statements.iter().enumerate() {
        println!("   {}. {}", i + 1, statement);
    }

    let rec = &report.recommendation;
    println!();
    println!("🩺 Recommended: {}", rec.label);
    println!("   Find one near you: {}", rec.lookup_url());
    println!();
}
