use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<html><body><h1>Welcome, Chirpy Admin</h1><p>Chirpy has been visited {} times!</p></body></html>",
        state.hits.current()
    ))
}

/// Zeroes the visit counter. Only allowed on the `dev` platform.
pub async fn reset_hits(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    ensure_dev(&state)?;
    state.hits.reset();
    tracing::info!("Visit counter reset");
    Ok((StatusCode::OK, "Hits Reset"))
}

/// Deletes all users and, through the foreign key, all chirps.
/// Only allowed on the `dev` platform.
pub async fn reset_data(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    ensure_dev(&state)?;
    let removed = state.store.reset_users().await?;
    tracing::warn!("Data reset: removed {} users and their chirps", removed);
    Ok((StatusCode::OK, "Data Reset"))
}

fn ensure_dev(state: &AppState) -> AppResult<()> {
    if state.config.deployment.is_dev() {
        Ok(())
    } else {
        tracing::warn!(
            "Refused admin reset on platform '{}'",
            state.config.deployment.platform
        );
        Err(AppError::Forbidden)
    }
}
