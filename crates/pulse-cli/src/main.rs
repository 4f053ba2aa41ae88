//! HealthPulse CLI - Symptom diary with health insights
//!
//! Usage:
//!   pulse init --seed                      Initialize database with demo data
//!   pulse add --symptom Fever -s Cough     Log today's symptoms
//!   pulse insights                         Generate insights
//!   pulse reminder add "Vitamin D" -t 09:00 Add a medicine reminder
//!   pulse serve --port 3000                Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init { seed } => commands::cmd_init(&cli.db, cli.no_encrypt, seed),
        Commands::Add {
            symptoms,
            date,
            severity,
            notes,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_entries_add(
                &db,
                &symptoms,
                date.as_deref(),
                &severity,
                notes.as_deref(),
            )
        }
        Commands::List => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_entries_list(&db)
        }
        Commands::Delete { id } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_entries_delete(&db, id)
        }
        Commands::Summary => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_summary(&db)
        }
        Commands::Insights { no_delay, json } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_insights(&db, no_delay, json).await
        }
        Commands::Reminders { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(RemindersAction::List) => commands::cmd_reminders_list(&db),
                Some(RemindersAction::Add {
                    name,
                    time,
                    frequency,
                }) => commands::cmd_reminders_add(&db, &name, &time, &frequency),
                Some(RemindersAction::Toggle { id }) => commands::cmd_reminders_toggle(&db, id),
                Some(RemindersAction::Delete { id }) => commands::cmd_reminders_delete(&db, id),
            }
        }
        Commands::Reports { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None => commands::cmd_reports_list(&db, None, 20),
                Some(ReportsAction::List { ward, limit }) => {
                    commands::cmd_reports_list(&db, ward.as_deref(), limit)
                }
                Some(ReportsAction::Submit {
                    ward,
                    symptoms,
                    severity,
                    notes,
                }) => commands::cmd_reports_submit(
                    &db,
                    &ward,
                    &symptoms,
                    &severity,
                    notes.as_deref(),
                ),
            }
        }
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            commands::cmd_serve(&cli.db, &host, port, cli.no_encrypt, static_dir.as_deref())
                .await
        }
        Commands::Status => commands::cmd_status(&cli.db, cli.no_encrypt),
    }
}
