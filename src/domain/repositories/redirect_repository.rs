//! Repository trait for redirect record data access.

use crate::domain::entities::{NewRedirect, RedirectRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for redirect records.
///
/// The store exclusively owns all records; callers only ever receive copies.
/// Uniqueness of `key` and `secret_key` is enforced by the underlying store
/// (unique indexes), not just by the in-process existence checks, so
/// concurrent inserts cannot slip past the check-then-insert race.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRedirectRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Persists a new record with `is_active = true` and `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the key or secret key collides with
    /// an existing record. Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_redirect: NewRedirect) -> Result<RedirectRecord, AppError>;

    /// Finds a record by its public key, regardless of `is_active`.
    /// No side effects.
    async fn find_by_key(&self, key: &str) -> Result<Option<RedirectRecord>, AppError>;

    /// Finds a record by its secret admin key, regardless of `is_active`.
    /// No side effects.
    async fn find_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<RedirectRecord>, AppError>;

    /// Atomically increments `clicks` for an active record and returns the
    /// updated row.
    ///
    /// Returns `Ok(None)` both when no record exists and when the record is
    /// deactivated; callers must not be able to tell the two apart. The
    /// read-check and increment are a single SQL update, so concurrent
    /// resolutions of the same key never lose updates.
    async fn increment_clicks(&self, key: &str) -> Result<Option<RedirectRecord>, AppError>;

    /// Sets `is_active = false` for the record with this secret key and
    /// returns the updated row, or `Ok(None)` if no record matches.
    /// Idempotent when the record is already inactive.
    async fn deactivate_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<RedirectRecord>, AppError>;

    /// Verifies the underlying store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
