//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init and shared utilities (open_db)
//! - `entries` - Diary entry commands (add, list, delete)
//! - `insights` - Summary and insight generation
//! - `reminders` - Medicine reminders (add, list, toggle, delete)
//! - `reports` - Community symptom reports (submit, list)
//! - `serve` - Web server command
//! - `status` - Database/encryption status

pub mod core;
pub mod entries;
pub mod insights;
pub mod reminders;
pub mod reports;
pub mod serve;
pub mod status;

// Re-export command functions for main.rs
pub use core::*;
pub use entries::*;
pub use insights::*;
pub use reminders::*;
pub use reports::*;
pub use serve::*;
pub use status::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
