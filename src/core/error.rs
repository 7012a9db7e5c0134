//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// 对外暴露的通用 500 消息，内部细节只进日志
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 核心错误类型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("internal error: {0}")]
    InternalServerError(String),
}

/// 单条错误响应 `{ "error": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 校验错误响应 `{ "errors": [...] }`
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) | CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            CoreError::Validation(errors) => {
                (status, Json(ValidationErrorResponse { errors })).into_response()
            }
            CoreError::BadRequest(msg) | CoreError::NotFound(msg) => {
                (status, Json(ErrorResponse { error: msg })).into_response()
            }
            CoreError::InternalServerError(detail) => {
                error!(detail = %detail, "请求处理内部错误");
                internal_error_response()
            }
        }
    }
}

/// 通用 500 响应，也供 panic 捕获层使用
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            CoreError::NotFound("Product not found".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CoreError::Validation(vec!["price must be a non-negative number".into()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoreError::BadRequest("Nothing to update".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoreError::InternalServerError("lock poisoned".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let response = CoreError::InternalServerError("secret".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Internal server error"})
        );
    }

    #[tokio::test]
    async fn error_bodies_follow_error_kind() {
        let response = CoreError::NotFound("Product not found".into()).into_response();
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Product not found"})
        );

        let response = CoreError::Validation(vec!["title is required (string)".into()]).into_response();
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"errors": ["title is required (string)"]})
        );
    }

    #[test]
    fn validation_display_joins_messages() {
        let err = CoreError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation failed: a; b");
    }
}
