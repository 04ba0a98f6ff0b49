use axum::{
    extract::FromRequest,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Serializes `payload` and writes it with `status`.
///
/// A payload that fails to serialize yields a bare 500 with an empty body.
pub fn json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error marshalling JSON: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// JSON request body extractor whose rejections become [`AppError::Decode`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn json_sets_status_and_content_type() {
        let res = json(StatusCode::CREATED, &serde_json::json!({ "a": 1 }));
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn serialization_failure_is_bare_500() {
        let res = json(StatusCode::OK, &Unserializable);
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.headers().get(header::CONTENT_TYPE).is_none());
    }
}
