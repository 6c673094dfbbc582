/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - ApiKeyError (header parsing) を 401 に変換
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::{API_KEY_SCHEME, ApiKeyError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    Unauthorized { code: &'static str, message: String },
}

impl AppError {
    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            code,
            message: message.into(),
        }
    }

    /// Drop the detailed message while keeping the code.
    pub fn redacted(self) -> Self {
        match self {
            AppError::Unauthorized { code, .. } => AppError::unauthorized(code, "unauthorized"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized { code, message } => (StatusCode::UNAUTHORIZED, code, message),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        let mut res = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_SCHEME),
            );
        }
        res
    }
}

impl From<ApiKeyError> for AppError {
    fn from(e: ApiKeyError) -> Self {
        let code = match e {
            ApiKeyError::NoAuthHeaderIncluded => "NO_AUTH_HEADER",
            ApiKeyError::MalformedAuthHeader => "MALFORMED_AUTH_HEADER",
        };
        AppError::unauthorized(code, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(res: Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unauthorized_renders_401_with_challenge() {
        let res = AppError::from(ApiKeyError::NoAuthHeaderIncluded).into_response();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.headers()[header::WWW_AUTHENTICATE], "ApiKey");

        let body = body_json(res).await;
        assert_eq!(body["error"]["code"], "NO_AUTH_HEADER");
        assert_eq!(body["error"]["message"], "no authorization header included");
    }

    #[tokio::test]
    async fn redacted_keeps_code_only() {
        let res = AppError::from(ApiKeyError::MalformedAuthHeader)
            .redacted()
            .into_response();

        let body = body_json(res).await;
        assert_eq!(body["error"]["code"], "MALFORMED_AUTH_HEADER");
        assert_eq!(body["error"]["message"], "unauthorized");
    }
}
