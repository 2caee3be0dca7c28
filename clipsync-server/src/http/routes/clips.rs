//! Clip entry endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::ClipEntry;
use crate::http::error::ApiError;
use crate::http::extractors::ValidClipId;
use crate::http::server::AppState;
use crate::models::{EntryContent, EntryKind, EntryTitle, ListLimit};
use crate::service::ClipService;

/// Create clip request
#[derive(Deserialize)]
pub struct CreateClipRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub title: Option<String>,
}

/// Clip response
#[derive(Serialize)]
pub struct ClipResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub content: String,
    pub title: Option<String>,
    pub created_at: Option<String>,
}

impl From<ClipEntry> for ClipResponse {
    fn from(e: ClipEntry) -> Self {
        Self {
            id: e.id,
            kind: e.kind,
            content: e.content,
            title: e.title,
            created_at: Some(e.created_at.to_rfc3339()),
        }
    }
}

/// List query params; raw string so a non-integer limit maps to 422
#[derive(Deserialize, Default)]
pub struct ListParams {
    pub limit: Option<String>,
}

/// POST /clip - create a clip entry
async fn create_clip(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateClipRequest>,
) -> Result<(StatusCode, Json<ClipResponse>), ApiError> {
    let kind = EntryKind::parse(&req.kind)?;
    let content = EntryContent::new(&req.content)?;
    let title = req
        .title
        .as_deref()
        .map(EntryTitle::new)
        .transpose()?;

    let entry = ClipService::new(&state.pool).create(kind, content, title).await?;

    Ok((StatusCode::CREATED, Json(ClipResponse::from(entry))))
}

/// GET /clips?limit=N - list clips newest first
async fn list_clips(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ClipResponse>>, ApiError> {
    let limit = ListLimit::parse(params.limit.as_deref())?;

    let entries = ClipService::new(&state.pool).list(limit).await?;

    Ok(Json(entries.into_iter().map(ClipResponse::from).collect()))
}

/// DELETE /clip/{id} - remove a clip entry
async fn delete_clip(
    State(state): State<Arc<AppState>>,
    ValidClipId(id): ValidClipId,
) -> Result<StatusCode, ApiError> {
    ClipService::new(&state.pool).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Clip routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clip", post(create_clip))
        .route("/clips", get(list_clips))
        .route("/clip/{id}", delete(delete_clip))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_shape_from_entry() {
        let entry = ClipEntry {
            id: 7,
            content: "https://example.com".into(),
            kind: EntryKind::Url,
            title: None,
            created_at: chrono::Utc::now(),
        };

        let response = ClipResponse::from(entry);
        let value = serde_json::to_value(&response).expect("serialization failed");
        assert_eq!(value["id"], 7);
        assert_eq!(value["type"], "url");
        assert_eq!(value["content"], "https://example.com");
        assert!(value["title"].is_null());
        assert!(value["created_at"].is_string());
    }
}
