//! Integration-style tests that drive the full router.
//!
//! - **api_tests**: users, chirps and the validation-only mode
//! - **admin_tests**: visit counting, the metrics report and the dev resets
//! - **store_tests**: schema, cascade and timeout behaviour of the store
//! - **config_tests**: layered configuration and its validation
//! - **error_tests**: status and message of every error kind


use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;

use crate::{config, db, routes, state::AppState};

/// A router over a throwaway database and static directory.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    // Keeps the database file and static files alive for the test
    _dir: TempDir,
}

/// `extra` is a TOML fragment layered over the embedded defaults.
pub async fn spawn_app(extra: &str) -> TestApp {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>Welcome to Chirpy</html>").unwrap();
    std::fs::create_dir_all(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets").join("logo.txt"), "logo").unwrap();

    let base = format!(
        "[server]\nstatic_dir = '{}'\n[database]\nurl = 'sqlite://{}'\nmax_connections = 1\n",
        dir.path().display(),
        dir.path().join("chirpy.db").display(),
    );
    let cfg = config::from_toml_str(&format!("{}\n{}", base, extra)).unwrap();
    let pool = db::connect(&cfg.database).await.unwrap();
    let state = AppState::new(pool, cfg);
    let router = routes::router(state.clone());
    TestApp { router, state, _dir: dir }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(res: Response<Body>) -> Vec<u8> {
    res.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(res: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(res).await).unwrap()
}

pub async fn body_text(res: Response<Body>) -> String {
    String::from_utf8(body_bytes(res).await).unwrap()
}
