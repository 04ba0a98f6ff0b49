use axum::{extract::State, http::StatusCode, response::Response};

use crate::{
    auth,
    error::{AppError, AppResult},
    response::{self, AppJson},
    state::AppState,
    types::CreateUserRequest,
};

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> AppResult<Response> {
    let hashed_password = match req.password {
        // Argon2 is deliberately slow; keep it off the async workers
        Some(password) => Some(
            tokio::task::spawn_blocking(move || auth::hash_password(&password))
                .await
                .map_err(|e| AppError::Internal(e.into()))?
                .map_err(|e| AppError::Internal(e.into()))?,
        ),
        None => None,
    };

    let user = state.store.create_user(&req.email, hashed_password.as_deref()).await?;
    tracing::info!(user_id = %user.id, "User created");
    Ok(response::json(StatusCode::CREATED, &user))
}
