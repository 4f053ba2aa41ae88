//! Status command implementation

use std::path::Path;

use anyhow::Result;

use super::open_db;

pub fn cmd_status(db_path: &Path, no_encrypt: bool) -> Result<()> {
    use pulse_core::db::DB_KEY_ENV;
    use pulse_core::insights::ANALYSIS_DELAY_ENV;
    use std::fs;

    println!();
    println!("📊 HealthPulse Status");
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    let has_key = std::env::var(DB_KEY_ENV).is_ok();
    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else if has_key {
        println!("   🔒 Encryption: ENABLED ({}=***)", DB_KEY_ENV);
    } else {
        println!("   ❌ Encryption: REQUIRED but {} not set", DB_KEY_ENV);
    }

    match std::env::var(ANALYSIS_DELAY_ENV) {
        Ok(ms) => println!("   Analysis delay: {} ms ({})", ms, ANALYSIS_DELAY_ENV),
        Err(_) => println!("   Analysis delay: random 2-3 s"),
    }

    if db_path.exists() {
        match open_db(db_path, no_encrypt) {
            Ok(db) => {
                match db.is_encrypted() {
                    Ok(true) => println!("   Verified: database is encrypted"),
                    Ok(false) => println!("   Verified: database is NOT encrypted"),
                    Err(e) => println!("   Could not verify encryption: {}", e),
                }
                if let Ok(summary) = db.get_diary_summary() {
                    println!();
                    println!("   Entries: {}", summary.total_entries);
                    println!("   Symptoms logged: {}", summary.total_symptoms);
                }
            }
            Err(e) => {
                println!();
                println!("   ❌ Error opening database: {}", e);
                if !no_encrypt && !has_key {
                    println!("      Set {} or use --no-encrypt", DB_KEY_ENV);
                } else if has_key {
                    println!("      (Check if {} is correct)", DB_KEY_ENV);
                }
            }
        }
    }

    println!();
    Ok(())
}
