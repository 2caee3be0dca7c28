//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses of the form
//! `{"detail": <message>}` with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;
use crate::service::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request shape validation failed (422)
    Validation(ValidationError),

    /// Business rule rejected the entry (422)
    InvalidEntry { detail: String },

    /// Resource not found (404)
    NotFound { detail: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "detail": e.to_string() }),
            ),
            Self::InvalidEntry { detail } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "detail": detail }),
            ),
            Self::NotFound { detail } => (StatusCode::NOT_FOUND, json!({ "detail": detail })),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": "an internal error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidEntry { .. } => Self::InvalidEntry {
                detail: e.to_string(),
            },
            ServiceError::NotFound { .. } => Self::NotFound {
                detail: e.to_string(),
            },
            ServiceError::Db(db) => Self::Database(db),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_detail(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read failed");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("invalid JSON body");
        value["detail"].as_str().expect("detail missing").to_string()
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::Empty { field: "content" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_detail(response).await, "content cannot be empty");
    }

    #[tokio::test]
    async fn invalid_entry_carries_fixed_detail() {
        let err: ApiError = ServiceError::InvalidEntry {
            reason: "content must be a valid URL when type=url",
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_detail(response).await,
            "content must be a valid URL when type=url"
        );
    }

    #[tokio::test]
    async fn not_found_is_404_with_id_in_detail() {
        let err: ApiError = ServiceError::NotFound { id: 999_999 }.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_detail(response).await, "Clip with id 999999 not found");
    }

    #[tokio::test]
    async fn database_error_is_opaque_500() {
        let err = ApiError::Database(DbError::ConstraintViolation {
            constraint: "check_clips_type".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_detail(response).await, "an internal error occurred");
    }
}
