use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

use crate::dtos::{TransformRequest, TransformResponse};
use crate::handlers::require_user;
use crate::services::rewrite;
use crate::startup::AppState;

/// Rewrite arbitrary text through the hosted model, styled by the user's
/// current theme and stored request. One synchronous call, no retries.
pub async fn transform_text(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<TransformRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let user = require_user(&state, &username).await?;

    let status = state
        .db
        .latest_status(user.id)
        .await?
        .filter(|s| s.is_enabled)
        .ok_or_else(|| {
            AppError::BadRequest(anyhow::anyhow!(
                "Text transformation is not enabled for this user"
            ))
        })?;

    let theme = status.theme.clone().unwrap_or_default();
    let preset = rewrite::preset_for(&theme).ok_or_else(|| {
        AppError::BadRequest(anyhow::anyhow!(
            "Theme '{}' does not support text transformation",
            theme
        ))
    })?;

    let prompt = rewrite::build_prompt(preset, status.request.as_deref(), &req.text);
    let params = rewrite::generation_params(preset);

    tracing::info!(
        username = %username,
        theme = %preset.theme,
        text_len = req.text.len(),
        "Dispatching rewrite to model"
    );

    let response = state.text_provider.generate(&prompt, &params).await?;

    let transformed = response
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::BadGateway("model returned an empty response".to_string()))?;

    tracing::info!(
        username = %username,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Rewrite completed"
    );

    Ok(Json(TransformResponse {
        original_text: req.text,
        transformed_text: transformed,
        theme: status.theme,
    }))
}
