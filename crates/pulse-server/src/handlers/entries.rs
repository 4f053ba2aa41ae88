//! Diary entry handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    Json,
};
use serde::Deserialize;

use crate::{get_user_id, AppError, AppState, SuccessResponse, MAX_BODY_SIZE};
use pulse_core::models::{DiaryEntry, NewDiaryEntry, SeverityLevel, Symptom};

/// Request body for logging an entry
///
/// Symptoms and severity arrive as strings so unknown values get a 400 with
/// a readable message instead of a bare deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub date: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub severity: Option<String>,
    pub notes: Option<String>,
}

impl CreateEntryRequest {
    fn into_new_entry(self) -> Result<NewDiaryEntry, AppError> {
        let symptoms = self
            .symptoms
            .iter()
            .map(|s| s.parse::<Symptom>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::bad_request(&e))?;

        let severity = match self.severity.as_deref() {
            Some(s) => s
                .parse::<SeverityLevel>()
                .map_err(|e| AppError::bad_request(&e))?,
            None => SeverityLevel::default(),
        };

        let mut entry = NewDiaryEntry::new(self.date, symptoms, severity);
        entry.notes = self.notes;
        Ok(entry)
    }
}

/// GET /api/entries - List entries, most recent first
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Vec<DiaryEntry>>, AppError> {
    let user_id = get_user_id(request.headers());

    let entries = state.db.list_entries()?;

    // Audit log - read access
    state.db.log_audit(
        &user_id,
        "list",
        Some("diary_entry"),
        None,
        Some(&format!("count={}", entries.len())),
    )?;

    Ok(Json(entries))
}

/// GET /api/entries/:id - Get a single entry
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<DiaryEntry>, AppError> {
    let user_id = get_user_id(request.headers());

    let entry = state
        .db
        .get_entry(id)?
        .ok_or_else(|| AppError::not_found(&format!("Entry {} not found", id)))?;

    state
        .db
        .log_audit(&user_id, "view", Some("diary_entry"), Some(id), None)?;

    Ok(Json(entry))
}

/// POST /api/entries - Log a new entry
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<DiaryEntry>, AppError> {
    let user_id = get_user_id(request.headers());

    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: CreateEntryRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let new_entry = req.into_new_entry()?;
    let id = state
        .db
        .create_entry(&new_entry)
        .map_err(AppError::from_core)?;

    state.db.log_audit(
        &user_id,
        "create",
        Some("diary_entry"),
        Some(id),
        Some(&format!(
            "symptoms={}, severity={}",
            new_entry.symptoms.len(),
            new_entry.severity
        )),
    )?;

    let entry = state
        .db
        .get_entry(id)?
        .ok_or_else(|| AppError::internal("Entry not found after creation"))?;

    Ok(Json(entry))
}

/// DELETE /api/entries/:id - Delete an entry
///
/// Deleting the last entry also drops the current insight report.
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<SuccessResponse>, AppError> {
    let user_id = get_user_id(request.headers());

    if !state.db.delete_entry(id)? {
        return Err(AppError::not_found(&format!("Entry {} not found", id)));
    }

    if state.db.count_entries()? == 0 {
        state.runner.clear().map_err(AppError::from_core)?;
    }

    state
        .db
        .log_audit(&user_id, "delete", Some("diary_entry"), Some(id), None)?;

    Ok(Json(SuccessResponse { success: true }))
}
