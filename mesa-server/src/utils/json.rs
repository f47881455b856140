//! JSON body extractor
//!
//! Same as [`axum::Json`], but a body that is not valid JSON, has the wrong
//! shape or lacks the JSON content type is answered with the usual
//! `{ "error": ..., "code": ... }` body instead of axum's plain-text rejection.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use shared::{AppError, ErrorCode};

/// JSON request body extractor with `AppError` rejections
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

/// Map an axum JSON rejection to a 400 `InvalidFormat` error
pub fn json_rejection(rejection: JsonRejection) -> AppError {
    let message = rejection.body_text();
    tracing::warn!(status = %rejection.status(), error = %message, "Rejected request body");
    AppError::with_message(ErrorCode::InvalidFormat, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(http::header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let AppJson(payload) =
            AppJson::<Payload>::from_request(request(Some("application/json"), r#"{"name":"Mesa 1"}"#), &())
                .await
                .unwrap();
        assert_eq!(payload.name, "Mesa 1");
    }

    #[tokio::test]
    async fn test_rejections_become_invalid_format() {
        for (content_type, body) in [
            (Some("application/json"), "{bad"),
            (Some("application/json"), r#"{"name":7}"#),
            (None, r#"{"name":"Mesa 1"}"#),
        ] {
            let err = AppJson::<Payload>::from_request(request(content_type, body), &())
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFormat);
            assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
            assert!(!err.message.is_empty());
        }
    }
}
