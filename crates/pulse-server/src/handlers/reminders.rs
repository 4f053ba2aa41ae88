//! Medicine reminder handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    Json,
};
use serde::Deserialize;

use crate::{get_user_id, AppError, AppState, SuccessResponse, MAX_BODY_SIZE};
use pulse_core::models::{NewReminder, Reminder, ReminderFrequency};

/// Request body for adding a reminder
#[derive(Debug, Deserialize)]
pub struct CreateReminderRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub time: String,
    pub frequency: Option<String>,
}

/// Request body for switching a reminder on or off
#[derive(Debug, Deserialize)]
pub struct UpdateReminderRequest {
    pub enabled: bool,
}

/// GET /api/reminders - List reminders
pub async fn list_reminders(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Vec<Reminder>>, AppError> {
    let user_id = get_user_id(request.headers());

    let reminders = state.db.list_reminders()?;

    state.db.log_audit(
        &user_id,
        "list",
        Some("reminder"),
        None,
        Some(&format!("count={}", reminders.len())),
    )?;

    Ok(Json(reminders))
}

/// POST /api/reminders - Add a reminder (starts enabled)
pub async fn create_reminder(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Reminder>, AppError> {
    let user_id = get_user_id(request.headers());

    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: CreateReminderRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let frequency = match req.frequency.as_deref() {
        Some(f) => f
            .parse::<ReminderFrequency>()
            .map_err(|e| AppError::bad_request(&e))?,
        None => ReminderFrequency::default(),
    };

    let id = state
        .db
        .create_reminder(&NewReminder::new(req.name, req.time, frequency))
        .map_err(AppError::from_core)?;

    state.db.log_audit(
        &user_id,
        "create",
        Some("reminder"),
        Some(id),
        Some(&format!("frequency={}", frequency)),
    )?;

    let reminder = state
        .db
        .get_reminder(id)?
        .ok_or_else(|| AppError::internal("Reminder not found after creation"))?;

    Ok(Json(reminder))
}

/// PATCH /api/reminders/:id - Enable or disable a reminder
pub async fn update_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<Reminder>, AppError> {
    let user_id = get_user_id(request.headers());

    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: UpdateReminderRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    if !state.db.set_reminder_enabled(id, req.enabled)? {
        return Err(AppError::not_found(&format!("Reminder {} not found", id)));
    }

    state.db.log_audit(
        &user_id,
        "update",
        Some("reminder"),
        Some(id),
        Some(&format!("enabled={}", req.enabled)),
    )?;

    let reminder = state
        .db
        .get_reminder(id)?
        .ok_or_else(|| AppError::not_found(&format!("Reminder {} not found", id)))?;

    Ok(Json(reminder))
}

/// POST /api/reminders/:id/toggle - Flip a reminder's enabled flag
pub async fn toggle_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<Reminder>, AppError> {
    let user_id = get_user_id(request.headers());

    let reminder = state.db.toggle_reminder(id).map_err(AppError::from_core)?;

    state.db.log_audit(
        &user_id,
        "toggle",
        Some("reminder"),
        Some(id),
        Some(&format!("enabled={}", reminder.enabled)),
    )?;

    Ok(Json(reminder))
}

/// DELETE /api/reminders/:id - Delete a reminder
pub async fn delete_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<SuccessResponse>, AppError> {
    let user_id = get_user_id(request.headers());

    if !state.db.delete_reminder(id)? {
        return Err(AppError::not_found(&format!("Reminder {} not found", id)));
    }

    state
        .db
        .log_audit(&user_id, "delete", Some("reminder"), Some(id), None)?;

    Ok(Json(SuccessResponse { success: true }))
}
