//! Clip entry service
//!
//! Orchestrates business validation and the store. Shape validation has
//! already happened at the HTTP boundary by the time these run.

use sqlx::PgPool;
use url::Url;

use crate::db::repos::{ClipEntry, ClipRepo, DbError};
use crate::models::{EntryContent, EntryKind, EntryTitle, ListLimit};

/// Fixed business-rule message for malformed URL content
const INVALID_URL_MESSAGE: &str = "content must be a valid URL when type=url";

/// Service error taxonomy
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Business validation failed; nothing was persisted
    #[error("{reason}")]
    InvalidEntry { reason: &'static str },

    /// Delete target does not exist
    #[error("Clip with id {id} not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Validate the type-conditional content rule.
///
/// Text entries are always valid. URL entries must parse with an http or
/// https scheme and a non-empty host. Synchronous, no side effects.
pub fn validate_entry(kind: EntryKind, content: &EntryContent) -> Result<(), ServiceError> {
    if kind == EntryKind::Url && !is_well_formed_url(content.as_str()) {
        return Err(ServiceError::InvalidEntry {
            reason: INVALID_URL_MESSAGE,
        });
    }
    Ok(())
}

fn is_well_formed_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Clip entry service
pub struct ClipService<'a> {
    pool: &'a PgPool,
}

impl<'a> ClipService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Validate then persist a new clip entry.
    pub async fn create(
        &self,
        kind: EntryKind,
        content: EntryContent,
        title: Option<EntryTitle>,
    ) -> Result<ClipEntry, ServiceError> {
        validate_entry(kind, &content)?;

        let entry = ClipRepo::new(self.pool).insert(content, kind, title).await?;
        Ok(entry)
    }

    /// List clips newest first. Straight delegation to the store.
    pub async fn list(&self, limit: ListLimit) -> Result<Vec<ClipEntry>, ServiceError> {
        let entries = ClipRepo::new(self.pool).list_ordered(limit.get()).await?;
        Ok(entries)
    }

    /// Delete a clip by id; absent ids signal NotFound.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let repo = ClipRepo::new(self.pool);

        if repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound { id });
        }

        // A racing delete between the lookup and here still reports the
        // winner through rows_affected; the loser maps to NotFound.
        if !repo.delete_by_id(id).await? {
            return Err(ServiceError::NotFound { id });
        }

        Ok(())
    }
}
