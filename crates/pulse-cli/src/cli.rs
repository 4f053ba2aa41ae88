//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// HealthPulse - Symptom diary with rule-based health insights
#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Self-hosted symptom diary with health insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "pulse.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for real health data)
    ///
    /// By default, the diary is encrypted using SQLCipher.
    /// Set PULSE_DB_KEY environment variable with your passphrase.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init {
        /// Load three demo entries and two demo reminders
        #[arg(long)]
        seed: bool,
    },

    /// Log a diary entry
    Add {
        /// Symptom to record (repeatable): Fever, Cough, Fatigue, Headache,
        /// "Sore Throat", "Body Aches", Nausea, Dizziness
        #[arg(short, long = "symptom", required = true)]
        symptoms: Vec<String>,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Severity: mild, moderate, severe
        #[arg(long, default_value = "mild")]
        severity: String,

        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List diary entries, most recent first
    List,

    /// Delete a diary entry
    Delete {
        /// Entry ID
        id: i64,
    },

    /// Show diary totals
    Summary,

    /// Generate health insights and a specialist recommendation
    Insights {
        /// Skip the pause before analysis
        #[arg(long)]
        no_delay: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage medicine reminders (lists them with no action)
    #[command(visible_alias = "reminder")]
    Reminders {
        #[command(subcommand)]
        action: Option<RemindersAction>,
    },

    /// Submit or browse anonymous community symptom reports
    #[command(visible_alias = "report")]
    Reports {
        #[command(subcommand)]
        action: Option<ReportsAction>,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Show database and encryption status
    Status,
}

#[derive(Subcommand)]
pub enum RemindersAction {
    /// Add a reminder (starts enabled)
    Add {
        /// Medicine name
        name: String,

        /// Time of day (HH:MM, 24-hour)
        #[arg(short, long, default_value = "09:00")]
        time: String,

        /// Frequency: daily, weekly, as_needed
        #[arg(short, long, default_value = "daily")]
        frequency: String,
    },

    /// List reminders
    List,

    /// Switch a reminder on or off
    Toggle {
        /// Reminder ID
        id: i64,
    },

    /// Delete a reminder
    Delete {
        /// Reminder ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ReportsAction {
    /// Submit a report for your ward
    Submit {
        /// Ward (e.g., Jayanagar, "BTM Layout")
        #[arg(short, long)]
        ward: String,

        /// Symptom to report (repeatable): Fever, Cough, Fatigue, "Body Aches"
        #[arg(short, long = "symptom", required = true)]
        symptoms: Vec<String>,

        /// Severity: mild, moderate, severe
        #[arg(long, default_value = "mild")]
        severity: String,

        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List recent reports
    List {
        /// Only show reports for this ward
        #[arg(short, long)]
        ward: Option<String>,

        /// Maximum number of reports
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },
}
