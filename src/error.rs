//! Service error types / 服务错误类型
//!
//! Every failure is terminal for the request that produced it and leaves the
//! store untouched; nothing here is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing input / 输入无效
    #[error("{0}")]
    Validation(String),

    /// A record with the same content hash already exists / 记录已存在
    #[error("String already exists")]
    Duplicate,

    /// Lookup or delete miss / 记录不存在
    #[error("{0}")]
    NotFound(String),

    /// Natural language query matched no known pattern / 无法解析的查询
    #[error("Unable to parse natural language query")]
    Interpretation,
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Duplicate => StatusCode::CONFLICT,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Interpretation => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::Validation("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ServiceError::Duplicate.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ServiceError::NotFound("missing".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Interpretation.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ServiceError::Duplicate.to_string(),
            "String already exists"
        );
        assert_eq!(
            ServiceError::NotFound("String does not exist in database".into()).to_string(),
            "String does not exist in database"
        );
    }
}
