//! Community report handlers

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    Json,
};
use serde::Deserialize;

use crate::{get_user_id, AppError, AppState, MAX_BODY_SIZE, MAX_PAGE_LIMIT};
use pulse_core::models::{CommunityReport, NewCommunityReport, SeverityLevel, Symptom, WARDS};

/// Request body for submitting a report
#[derive(Debug, Deserialize)]
pub struct CreateReportRequest {
    #[serde(default)]
    pub ward: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub severity: Option<String>,
    pub notes: Option<String>,
}

/// Query parameters for listing reports
#[derive(Debug, Deserialize)]
pub struct ReportsQuery {
    pub ward: Option<String>,
    #[serde(default = "default_reports_limit")]
    pub limit: i64,
}

fn default_reports_limit() -> i64 {
    100
}

/// GET /api/wards - Wards a report can be filed for
pub async fn list_wards() -> Json<Vec<&'static str>> {
    Json(WARDS.to_vec())
}

/// GET /api/reports - Recent community reports, newest first
pub async fn list_reports(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportsQuery>,
    request: Request,
) -> Result<Json<Vec<CommunityReport>>, AppError> {
    let user_id = get_user_id(request.headers());
    let limit = params.limit.clamp(1, MAX_PAGE_LIMIT);

    let reports = state.db.list_reports(params.ward.as_deref(), limit)?;

    state.db.log_audit(
        &user_id,
        "list",
        Some("community_report"),
        None,
        Some(&format!("count={}", reports.len())),
    )?;

    Ok(Json(reports))
}

/// POST /api/reports - Submit an anonymous community report
pub async fn create_report(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<CommunityReport>, AppError> {
    let user_id = get_user_id(request.headers());

    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: CreateReportRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let symptoms = req
        .symptoms
        .iter()
        .map(|s| s.parse::<Symptom>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::bad_request(&e))?;
    let severity = match req.severity.as_deref() {
        Some(s) => s
            .parse::<SeverityLevel>()
            .map_err(|e| AppError::bad_request(&e))?,
        None => SeverityLevel::default(),
    };

    let mut report = NewCommunityReport::new(req.ward, symptoms, severity);
    report.notes = req.notes;

    let id = state
        .db
        .create_report(&report)
        .map_err(AppError::from_core)?;

    state
        .db
        .log_audit(&user_id, "create", Some("community_report"), Some(id), None)?;

    let created = state
        .db
        .get_report(id)?
        .ok_or_else(|| AppError::internal("Report not found after creation"))?;

    Ok(Json(created))
}
