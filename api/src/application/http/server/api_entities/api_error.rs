use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use sajian_core::domain::common::entities::app_errors::CoreError;

use super::response::{Envelope, StatusSchema};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();
        match error {
            CoreError::Validation(_) => ApiError::BadRequest(message),
            CoreError::NotFound(_) => ApiError::NotFound(message),
            CoreError::Storage(_) => ApiError::InternalServerError(message),
            CoreError::Publish(_) => ApiError::ServiceUnavailable(message),
        }
    }
}

impl ApiError {
    fn status(&self) -> (StatusCode, StatusSchema) {
        match self {
            ApiError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                StatusSchema::error("SWT-40-001", "Invalid request", "Permintaan tidak valid"),
            ),
            ApiError::Unauthorized(_) => (
                StatusCode::UNAUTHORIZED,
                StatusSchema::error("SWT-40-101", "Unauthorized", "Tidak terotorisasi"),
            ),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                StatusSchema::error("SWT-40-401", "Data not found", "Data tidak ditemukan"),
            ),
            ApiError::InternalServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusSchema::error(
                    "SWT-50-001",
                    "Internal server error",
                    "Terjadi kesalahan pada server",
                ),
            ),
            ApiError::ServiceUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                StatusSchema::error("SWT-50-002", "Service unavailable", "Layanan tidak tersedia"),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("request failed: {}", self);

        let (status_code, status) = self.status();
        (status_code, Json(Envelope::error(status))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_their_http_counterparts() {
        let cases = [
            (
                CoreError::Validation("name is required".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::NotFound("category x".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                CoreError::Storage("connection reset".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::Publish("broker down".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (error, expected) in cases {
            let (status, _) = ApiError::from(error).status();
            assert_eq!(status, expected);
        }
    }
}
