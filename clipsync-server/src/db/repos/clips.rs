//! Clip entry repository
//!
//! Assumes the caller has already validated input; the check constraint
//! on `type` is the storage-level backstop, not the primary gate.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::{EntryContent, EntryKind, EntryTitle};

/// Clip entry record from database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipEntry {
    pub id: i64,
    pub content: String,
    pub kind: EntryKind,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// Storage-level constraint rejected a write. Unreachable through the
    /// service path, which validates before insert.
    #[error("storage constraint violated: {constraint}")]
    ConstraintViolation { constraint: String },

    #[error("corrupt row {id}: unknown entry type '{value}'")]
    CorruptRow { id: i64, value: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.kind() == sqlx::error::ErrorKind::CheckViolation {
                return Self::ConstraintViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        Self::Sqlx(e)
    }
}

/// Clip entry repository
pub struct ClipRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ClipRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new clip; the store assigns id and created_at.
    pub async fn insert(
        &self,
        content: EntryContent,
        kind: EntryKind,
        title: Option<EntryTitle>,
    ) -> Result<ClipEntry, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO clips (content, type, title)
            VALUES ($1, $2, $3)
            RETURNING id, content, type, title, created_at
            "#,
        )
        .bind(content.as_str())
        .bind(kind.as_str())
        .bind(title.as_ref().map(|t| t.as_str()))
        .fetch_one(self.pool)
        .await?;

        entry_from_row(&row)
    }

    /// List clips newest first, capped at `limit` rows.
    ///
    /// Ties on created_at break by id descending for deterministic order.
    pub async fn list_ordered(&self, limit: i64) -> Result<Vec<ClipEntry>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, content, type, title, created_at
            FROM clips
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(entry_from_row).collect()
    }

    /// Fetch a single clip by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ClipEntry>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT id, content, type, title, created_at
            FROM clips
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(entry_from_row).transpose()
    }

    /// Delete a clip by id; returns whether a row was removed.
    ///
    /// Row-level atomicity means concurrent deletes of the same id see
    /// exactly one true result.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM clips WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn entry_from_row(row: &PgRow) -> Result<ClipEntry, DbError> {
    let id: i64 = row.get("id");
    let kind_raw: String = row.get("type");
    let kind = EntryKind::parse(&kind_raw).map_err(|_| DbError::CorruptRow {
        id,
        value: kind_raw,
    })?;

    Ok(ClipEntry {
        id,
        content: row.get("content"),
        kind,
        title: row.get("title"),
        created_at: row.get("created_at"),
    })
}
