//! Diary summary handler

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    Json,
};

use crate::{get_user_id, AppError, AppState};
use pulse_core::models::DiarySummary;

/// GET /api/summary - Totals shown above the diary
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<DiarySummary>, AppError> {
    let user_id = get_user_id(request.headers());

    let summary = state.db.get_diary_summary()?;

    state
        .db
        .log_audit(&user_id, "view", Some("summary"), None, None)?;

    Ok(Json(summary))
}
