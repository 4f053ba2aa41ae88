//! Insight Engine - rule-based diary analysis
//!
//! Turns a snapshot of diary entries into four short statements and one
//! specialist recommendation. Everything here is deterministic except the
//! optional pause before a run, which is injected through [`AnalysisDelay`].
//!
//! ## Pieces
//!
//! - [`SymptomStats`] - aggregate counts over a snapshot
//! - [`statements`] - ordered rule tables for the four statement slots
//! - [`specialist`] - priority-ordered specialist rules
//! - [`InsightRunner`] - run state machine around the engine
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pulse_core::insights::{InsightRunner, NoDelay};
//!
//! let runner = Arc::new(InsightRunner::new(Arc::new(NoDelay)));
//! let report = runner.generate(db.list_entries()?).await?;
//! ```

pub mod delay;
pub mod engine;
pub mod run;
pub mod specialist;
pub mod statements;
pub mod stats;
pub mod types;

pub use delay::{
    delay_from_env, parse_delay, AnalysisDelay, FixedDelay, NoDelay, RandomDelay,
    ANALYSIS_DELAY_ENV,
};
pub use engine::InsightEngine;
pub use run::{AnalysisAction, AnalysisState, InsightRunner, GENERIC_FAILURE};
pub use specialist::{match_specialty, recommend};
pub use statements::generate_statements;
pub use stats::{SeverityCounts, SymptomStats};
pub use types::{InsightReport, Recommendation, Specialty};
