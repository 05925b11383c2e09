use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

use crate::dtos::{CreateUserRequest, UserResponse};
use crate::handlers::require_user;
use crate::models::NewUser;
use crate::startup::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    // Usernames are unique; the store reports a duplicate as a conflict.
    let user = state
        .db
        .users()
        .insert(&NewUser {
            username: req.username,
            is_admin: req.is_admin,
        })
        .await?;

    tracing::info!(username = %user.username, user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &username).await?;
    Ok(Json(UserResponse::from(user)))
}
