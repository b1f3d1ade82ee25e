//! PostgreSQL implementation of the redirect repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRedirect, RedirectRecord};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// Database row shape for the `redirects` table.
#[derive(sqlx::FromRow)]
struct RedirectRow {
    id: i64,
    key: String,
    secret_key: String,
    target_url: String,
    is_active: bool,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<RedirectRow> for RedirectRecord {
    fn from(row: RedirectRow) -> Self {
        RedirectRecord::new(
            row.id,
            row.key,
            row.secret_key,
            row.target_url,
            row.is_active,
            row.clicks,
            row.created_at,
        )
    }
}

const RETURNING: &str = "id, key, secret_key, target_url, is_active, clicks, created_at";

/// PostgreSQL repository for redirect record storage and mutation.
///
/// Uniqueness of `key` and `secret_key` is guaranteed by unique indexes
/// (see `migrations/`); concurrent inserts of a colliding key surface as
/// [`AppError::Conflict`] for the service layer to retry. Click increments
/// and deactivation are single-statement updates, so per-record mutations
/// are linearizable without explicit locking.
pub struct PgRedirectRepository {
    pool: Arc<PgPool>,
}

impl PgRedirectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectRepository for PgRedirectRepository {
    async fn insert(&self, new_redirect: NewRedirect) -> Result<RedirectRecord, AppError> {
        let row: RedirectRow = sqlx::query_as(&format!(
            "INSERT INTO redirects (key, secret_key, target_url) \
             VALUES ($1, $2, $3) \
             RETURNING {RETURNING}"
        ))
        .bind(&new_redirect.key)
        .bind(&new_redirect.secret_key)
        .bind(&new_redirect.target_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<RedirectRecord>, AppError> {
        let row: Option<RedirectRow> =
            sqlx::query_as(&format!("SELECT {RETURNING} FROM redirects WHERE key = $1"))
                .bind(key)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<RedirectRecord>, AppError> {
        let row: Option<RedirectRow> = sqlx::query_as(&format!(
            "SELECT {RETURNING} FROM redirects WHERE secret_key = $1"
        ))
        .bind(secret_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_clicks(&self, key: &str) -> Result<Option<RedirectRecord>, AppError> {
        // Single statement: the active check and the increment cannot be
        // interleaved by concurrent resolutions of the same key.
        let row: Option<RedirectRow> = sqlx::query_as(&format!(
            "UPDATE redirects \
             SET clicks = clicks + 1 \
             WHERE key = $1 AND is_active \
             RETURNING {RETURNING}"
        ))
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn deactivate_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<RedirectRecord>, AppError> {
        // Matches inactive rows too: deactivation is idempotent and the
        // rightful secret holder keeps getting the record back.
        let row: Option<RedirectRow> = sqlx::query_as(&format!(
            "UPDATE redirects \
             SET is_active = FALSE \
             WHERE secret_key = $1 \
             RETURNING {RETURNING}"
        ))
        .bind(secret_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
