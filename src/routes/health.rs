use axum::{http::StatusCode, response::IntoResponse};

// Liveness probe: must answer even when the database is down, so no state.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
