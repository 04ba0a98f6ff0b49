use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::metrics::HitCounter;

/// Counts one visit per request before handing it to the file server.
pub async fn count_visit(State(hits): State<HitCounter>, req: Request, next: Next) -> Response {
    hits.record();
    next.run(req).await
}
