//! HealthPulse Core Library
//!
//! Shared functionality for the HealthPulse symptom diary:
//! - Diary entry models and the fixed symptom vocabulary
//! - Medicine reminders and anonymous community symptom reports
//! - Encrypted entry store with connection pooling and an audit log
//! - Rule-based insight engine and specialist recommendation
//! - Analysis run state machine with a pluggable delay strategy

pub mod db;
pub mod error;
pub mod insights;
pub mod models;

/// Test utilities (diary entry builders)
#[cfg(test)]
pub mod test_utils;

pub use db::{AuditEntry, Database};
pub use error::{Error, Result};
pub use insights::{
    AnalysisAction, AnalysisDelay, AnalysisState, InsightEngine, InsightReport, Recommendation,
    Specialty, SymptomStats,
};
pub use models::{
    CommunityReport, DiaryEntry, DiarySummary, NewCommunityReport, NewDiaryEntry, NewReminder,
    Reminder, ReminderFrequency, SeverityLevel, Symptom,
};
