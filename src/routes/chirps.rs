use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    moderation,
    response::{self, AppJson},
    state::AppState,
    types::{CreateChirpRequest, ValidateChirpRequest, ValidateChirpResponse},
};

pub async fn create_chirp(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateChirpRequest>,
) -> AppResult<Response> {
    let body = moderation::moderate(&req.body)?;
    let chirp = state.store.create_chirp(&body, req.user_id).await?;
    tracing::debug!(chirp_id = %chirp.id, user_id = %chirp.user_id, "Chirp created");
    Ok(response::json(StatusCode::CREATED, &chirp))
}

pub async fn list_chirps(State(state): State<AppState>) -> AppResult<Response> {
    let chirps = state.store.list_chirps().await?;
    Ok(response::json(StatusCode::OK, &chirps))
}

pub async fn get_chirp(State(state): State<AppState>, Path(chirp_id): Path<String>) -> AppResult<Response> {
    let id = Uuid::parse_str(&chirp_id).map_err(|e| AppError::InvalidChirpId(e.to_string()))?;
    let chirp = state.store.get_chirp(id).await?;
    Ok(response::json(StatusCode::OK, &chirp))
}

/// Moderation without persistence: returns the redacted body.
pub async fn validate_chirp(AppJson(req): AppJson<ValidateChirpRequest>) -> AppResult<Response> {
    let cleaned_body = moderation::moderate(&req.body)?;
    Ok(response::json(StatusCode::OK, &ValidateChirpResponse { cleaned_body }))
}
