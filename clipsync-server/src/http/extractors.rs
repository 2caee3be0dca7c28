//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a clip id from the path.
///
/// Ids must parse as positive integers; anything else is a shape error,
/// not a missing resource.
pub struct ValidClipId(pub i64);

impl<S> FromRequestParts<S> for ValidClipId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let id = raw.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a positive integer",
            })
        })?;

        if id < 1 {
            return Err(ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a positive integer",
            }));
        }

        Ok(Self(id))
    }
}
