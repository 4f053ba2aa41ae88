//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use pulse_core::db::Database;

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool, seed: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path, no_encrypt)?;

    if seed {
        let added = db
            .seed_demo_entries()
            .context("Failed to seed demo entries")?;
        if added > 0 {
            println!("   Seeded {} demo entries", added);
        } else {
            println!("   Diary already has entries, skipped demo data");
        }

        let reminders = db
            .seed_demo_reminders()
            .context("Failed to seed demo reminders")?;
        if reminders > 0 {
            println!("   Seeded {} demo reminders", reminders);
        }
    }

    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Log symptoms: pulse add --symptom Fever --severity moderate");
    println!("  2. Get insights: pulse insights");
    println!("  3. Add a reminder: pulse reminder add \"Vitamin D\" --time 09:00");
    println!("  4. Start web UI: pulse serve");

    Ok(())
}
