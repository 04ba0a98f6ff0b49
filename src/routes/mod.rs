//! HTTP route handlers and the router that mounts them.
//!
//! - `admin`: visit report and the dev-only resets
//! - `chirps`: chirp creation, listing, lookup and stateless validation
//! - `health`: liveness probe
//! - `users`: user creation

pub mod admin;
pub mod chirps;
pub mod health;
pub mod users;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{middleware::metrics::count_visit, state::AppState};

/// Builds the full router. Route availability follows `features`.
pub fn router(state: AppState) -> Router {
    let features = &state.config.features;
    let static_root = state.config.server.static_dir.clone();

    let mut app = Router::new()
        .route("/api/healthz", get(health::healthz))
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset_hits));

    if features.persistence {
        app = app
            .route("/admin/reset/data", post(admin::reset_data))
            .route("/api/users", post(users::create_user))
            .route("/api/chirps", post(chirps::create_chirp).get(chirps::list_chirps))
            .route("/api/chirps/{chirp_id}", get(chirps::get_chirp));
    }
    if features.validate_endpoint {
        app = app.route("/api/validate_chirp", post(chirps::validate_chirp));
    }

    // Only app visits are counted; assets are not
    let app_files: Router<AppState> = Router::new()
        .nest_service("/app", ServeDir::new(&static_root).append_index_html_on_directories(true))
        .layer(from_fn_with_state(state.hits.clone(), count_visit));

    app.merge(app_files)
        .nest_service("/assets", ServeDir::new(static_root.join("assets")))
        .with_state(state)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(TraceLayer::new_for_http())
}
