//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod audit;
pub mod entries;
pub mod insights;
pub mod reminders;
pub mod reports;
pub mod summary;

// Re-export all handlers for use in router
pub use audit::*;
pub use entries::*;
pub use insights::*;
pub use reminders::*;
pub use reports::*;
pub use summary::*;
