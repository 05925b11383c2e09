use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

use crate::dtos::{CreateStatusRequest, StatusResponse, UpdateStatusRequest};
use crate::handlers::require_user;
use crate::models::{NewStatus, StatusPatch};
use crate::startup::AppState;

/// All of the user's status rows, newest first. Clients treat the first
/// element as the current status.
pub async fn list_status(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &username).await?;

    let rows = state
        .db
        .statuses()
        .select()
        .eq("user_uuid", user.id)
        .order_desc("created_at")
        .fetch()
        .await?;

    let statuses: Vec<StatusResponse> = rows.into_iter().map(StatusResponse::from).collect();
    Ok(Json(statuses))
}

pub async fn create_status(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<CreateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let user = require_user(&state, &username).await?;

    // The owning user always comes from the path, never the body.
    let status = state
        .db
        .statuses()
        .insert(&NewStatus {
            user_uuid: user.id,
            is_enabled: req.is_enabled,
            theme: req.theme,
            request: req.request,
            image_url: req.image_url,
            sound_url: req.sound_url,
        })
        .await?;

    tracing::info!(
        username = %username,
        status_id = status.id,
        is_enabled = status.is_enabled,
        "Status record created"
    );

    Ok((StatusCode::CREATED, Json(StatusResponse::from(status))))
}

/// Partial update of the user's newest status row.
pub async fn update_status(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let user = require_user(&state, &username).await?;

    let current = state
        .db
        .latest_status(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No status record for user")))?;

    let patch = StatusPatch {
        is_enabled: req.is_enabled,
        theme: req.theme,
        request: req.request,
        image_url: req.image_url,
        sound_url: req.sound_url,
    };

    if patch.is_empty() {
        return Ok(Json(StatusResponse::from(current)));
    }

    let updated = state
        .db
        .statuses()
        .update(&patch)?
        .eq("id", current.id)
        .fetch_one()
        .await?;

    tracing::info!(
        username = %username,
        status_id = updated.id,
        is_enabled = updated.is_enabled,
        "Status record updated"
    );

    Ok(Json(StatusResponse::from(updated)))
}
