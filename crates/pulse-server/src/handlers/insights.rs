//! Insight handlers

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    Json,
};

use crate::{get_user_id, AppError, AppState};
use pulse_core::{AnalysisState, InsightReport};

/// GET /api/insights - Current analysis state (idle, pending, complete, failed)
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<AnalysisState>, AppError> {
    let user_id = get_user_id(request.headers());

    let current = state.runner.state().map_err(AppError::from_core)?;

    state.db.log_audit(
        &user_id,
        "view",
        Some("insights"),
        None,
        Some(&format!("status={}", current.as_str())),
    )?;

    Ok(Json(current))
}

/// POST /api/insights - Generate insights from the current diary
///
/// Returns 400 for an empty diary and 409 while another run is pending.
/// The run itself executes on its own task, so it still completes and
/// publishes its report if the client disconnects during the delay.
pub async fn generate_insights(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<InsightReport>, AppError> {
    let user_id = get_user_id(request.headers());

    let entries = state.db.list_entries()?;
    let count = entries.len();

    let report = state
        .runner
        .generate(entries)
        .await
        .map_err(AppError::from_core)?;

    state.db.log_audit(
        &user_id,
        "generate",
        Some("insights"),
        None,
        Some(&format!(
            "entries={}, specialty={}",
            count,
            report.recommendation.specialty.as_str()
        )),
    )?;

    Ok(Json(report))
}
