//! Analysis runs
//!
//! A run moves through an explicit state machine instead of loose busy flags:
//!
//! ```text
//!            Start              Resolve(report)
//!   Idle ───────────▶ Pending ─────────────────▶ Complete
//!   Complete/Failed ──Start──▶     │ Reject(reason)
//!                                  └───────────────▶ Failed
//! ```
//!
//! Only one run may be pending at a time. A second `Start` while pending is
//! rejected rather than queued. Once started, a run executes on its own task
//! and always settles, even if the caller stops waiting for it.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::DiaryEntry;

use super::delay::AnalysisDelay;
use super::engine::InsightEngine;
use super::types::InsightReport;

/// User-facing message for unexpected failures
pub const GENERIC_FAILURE: &str = "Failed to generate insights. Please try again.";

/// Where the current insight run stands
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisState {
    #[default]
    Idle,
    Pending,
    Complete { report: InsightReport },
    Failed { reason: String },
}

/// Transitions of [`AnalysisState`]
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisAction {
    Start,
    Resolve(InsightReport),
    Reject(String),
}

impl AnalysisState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Pending => "pending",
            AnalysisState::Complete { .. } => "complete",
            AnalysisState::Failed { .. } => "failed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisState::Pending)
    }

    pub fn report(&self) -> Option<&InsightReport> {
        match self {
            AnalysisState::Complete { report } => Some(report),
            _ => None,
        }
    }

    /// Apply a transition. Starting discards any previous report.
    pub fn apply(&mut self, action: AnalysisAction) -> Result<()> {
        let next = match (&*self, action) {
            (AnalysisState::Pending, AnalysisAction::Start) => {
                return Err(Error::AnalysisInProgress)
            }
            (_, AnalysisAction::Start) => AnalysisState::Pending,
            (AnalysisState::Pending, AnalysisAction::Resolve(report)) => {
                AnalysisState::Complete { report }
            }
            (AnalysisState::Pending, AnalysisAction::Reject(reason)) => {
                AnalysisState::Failed { reason }
            }
            (current, AnalysisAction::Resolve(_)) => {
                return Err(Error::InvalidTransition(format!(
                    "cannot resolve from {}",
                    current.as_str()
                )))
            }
            (current, AnalysisAction::Reject(_)) => {
                return Err(Error::InvalidTransition(format!(
                    "cannot reject from {}",
                    current.as_str()
                )))
            }
        };
        *self = next;
        Ok(())
    }

    /// Drop any report, e.g. once the diary has been emptied
    pub fn reset(&mut self) {
        *self = AnalysisState::Idle;
    }
}

/// State plus a deferred clear requested while a run was pending
#[derive(Debug, Default)]
struct RunSlot {
    state: AnalysisState,
    discard_on_settle: bool,
}

/// Owns the engine, the delay strategy and the shared run state
pub struct InsightRunner {
    engine: InsightEngine,
    delay: Arc<dyn AnalysisDelay>,
    slot: Mutex<RunSlot>,
}

impl InsightRunner {
    pub fn new(delay: Arc<dyn AnalysisDelay>) -> Self {
        Self {
            engine: InsightEngine::new(),
            delay,
            slot: Mutex::new(RunSlot::default()),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> Result<AnalysisState> {
        Ok(self.lock()?.state.clone())
    }

    /// Forget the last report (the diary became empty).
    ///
    /// A pending run is left to finish, but its report is dropped when it
    /// settles.
    pub fn clear(&self) -> Result<()> {
        let mut slot = self.lock()?;
        if slot.state.is_pending() {
            slot.discard_on_settle = true;
        } else {
            slot.state.reset();
        }
        Ok(())
    }

    /// Start a run on its own task and hand back its handle.
    ///
    /// Empty snapshots and overlapping runs are rejected here, before any task
    /// is spawned. Dropping the handle does not stop the run.
    pub fn start(
        self: &Arc<Self>,
        entries: Vec<DiaryEntry>,
    ) -> Result<JoinHandle<Result<InsightReport>>> {
        if entries.is_empty() {
            warn!("Insight generation requested with no diary entries");
            return Err(Error::NothingToAnalyze);
        }

        {
            let mut slot = self.lock()?;
            slot.state.apply(AnalysisAction::Start)?;
            slot.discard_on_settle = false;
        }

        info!(
            entries = entries.len(),
            delay = self.delay.name(),
            "Starting insight analysis"
        );

        let runner = Arc::clone(self);
        Ok(tokio::spawn(async move { runner.run(entries).await }))
    }

    /// Start a run and wait for its report.
    ///
    /// The report is published to the shared state and returned together.
    pub async fn generate(self: &Arc<Self>, entries: Vec<DiaryEntry>) -> Result<InsightReport> {
        let handle = self.start(entries)?;
        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Insight analysis task failed");
                Err(Error::Analysis(GENERIC_FAILURE.to_string()))
            }
        }
    }

    async fn run(&self, entries: Vec<DiaryEntry>) -> Result<InsightReport> {
        let mut guard = PendingGuard {
            runner: self,
            settled: false,
        };

        self.delay.wait().await;
        let report = self.engine.analyze(&entries);

        guard.settle(AnalysisAction::Resolve(report.clone()))?;
        info!(
            specialty = report.recommendation.specialty.as_str(),
            "Insight analysis complete"
        );
        Ok(report)
    }

    fn lock(&self) -> Result<MutexGuard<'_, RunSlot>> {
        self.slot
            .lock()
            .map_err(|_| Error::Analysis("analysis state lock poisoned".to_string()))
    }
}

/// Moves a run to `Failed` if its task unwinds before settling
struct PendingGuard<'a> {
    runner: &'a InsightRunner,
    settled: bool,
}

impl PendingGuard<'_> {
    fn settle(&mut self, action: AnalysisAction) -> Result<()> {
        let runner = self.runner;
        let mut slot = runner.lock()?;
        self.settled = true;
        slot.state.apply(action)?;
        if std::mem::take(&mut slot.discard_on_settle) {
            info!("Diary emptied during analysis, discarding report");
            slot.state.reset();
        }
        Ok(())
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Ok(mut slot) = self.runner.slot.lock() {
            if slot.state.is_pending() {
                let _ = slot
                    .state
                    .apply(AnalysisAction::Reject(GENERIC_FAILURE.to_string()));
                slot.discard_on_settle = false;
            }
        }
    }
}
