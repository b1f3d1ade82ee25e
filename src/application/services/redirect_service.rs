//! Redirect record lifecycle service.
//!
//! Owns creation (key minting, target validation) and all state
//! transitions: click counting on resolution and secret-key-gated
//! deactivation. A record moves `Active -> Inactive` exactly once and
//! never back.

use std::sync::Arc;

use crate::domain::entities::{NewRedirect, RedirectRecord};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;
use crate::utils::key_generator::generate_key;
use crate::utils::target_url::validate_target_url;
use serde_json::json;

/// Retry budget for the unique-key search. With an 8-character key the
/// keyspace is 62^8 (~218 trillion), so hitting this cap means something
/// is badly wrong with the keyspace or the RNG.
const MAX_KEY_ATTEMPTS: usize = 1000;

/// Retry budget for insert races lost to concurrent creators. Each retry
/// regenerates both keys.
const MAX_INSERT_ATTEMPTS: usize = 3;

/// Service for creating, resolving, and administering redirect records.
pub struct RedirectService<R: RedirectRepository> {
    repository: Arc<R>,
    key_length: usize,
}

impl<R: RedirectRepository> RedirectService<R> {
    /// Creates a new redirect service generating keys of `key_length`.
    pub fn new(repository: Arc<R>, key_length: usize) -> Self {
        Self {
            repository,
            key_length,
        }
    }

    /// Creates a redirect record for a target URL.
    ///
    /// Validates the target, mints a unique public key and a unique secret
    /// key, and persists the record with `is_active = true` and `clicks = 0`.
    /// The returned record carries the secret key; this is the only moment
    /// it is handed back to the creator in-band.
    ///
    /// The in-process existence checks are inherently racy across concurrent
    /// creators, so the insert relies on database unique constraints and
    /// retries with fresh keys when it loses the race.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the target is not a well-formed
    /// absolute HTTP(S) URL. Returns [`AppError::KeyspaceExhausted`] if the
    /// unique-key search exceeds its retry budget.
    pub async fn create_redirect(&self, target_url: &str) -> Result<RedirectRecord, AppError> {
        let target_url = validate_target_url(target_url).map_err(|e| {
            AppError::bad_request(
                "Your provided URL is not valid",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let mut attempt = 0;
        loop {
            let new_redirect = NewRedirect {
                key: self.generate_unique_key().await?,
                secret_key: self.generate_unique_secret_key().await?,
                target_url: target_url.clone(),
            };

            match self.repository.insert(new_redirect).await {
                Ok(record) => {
                    tracing::info!(key = %record.key, "created redirect");
                    return Ok(record);
                }
                Err(AppError::Conflict { .. }) if attempt + 1 < MAX_INSERT_ATTEMPTS => {
                    tracing::warn!(attempt, "lost key insert race, regenerating keys");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Looks up a record by its public key.
    ///
    /// Does not filter by `is_active` and has no side effects; callers
    /// decide what "found but inactive" means.
    pub async fn find_by_key(&self, key: &str) -> Result<Option<RedirectRecord>, AppError> {
        self.repository.find_by_key(key).await
    }

    /// Resolves a public key for redirecting, counting the click.
    ///
    /// Missing and deactivated records produce the same `NotFound` outcome,
    /// so a disabled link cannot be told apart from one that never existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the key is absent or inactive.
    pub async fn resolve_for_redirect(&self, key: &str) -> Result<RedirectRecord, AppError> {
        self.repository
            .increment_clicks(key)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "key": key })))
    }

    /// Looks up a record by its secret admin key.
    ///
    /// Works regardless of `is_active`: deactivation does not revoke
    /// lookups by the rightful secret holder.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    pub async fn get_admin_info(&self, secret_key: &str) -> Result<RedirectRecord, AppError> {
        self.repository
            .find_by_secret_key(secret_key)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({})))
    }

    /// Deactivates the record matching this secret key.
    ///
    /// Idempotent if the record is already inactive. The transition is
    /// terminal; nothing reactivates a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    pub async fn deactivate(&self, secret_key: &str) -> Result<RedirectRecord, AppError> {
        let record = self
            .repository
            .deactivate_by_secret_key(secret_key)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({})))?;

        tracing::info!(key = %record.key, "deactivated redirect");
        Ok(record)
    }

    /// Verifies the backing store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Generates a public key no existing record uses.
    async fn generate_unique_key(&self) -> Result<String, AppError> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let key = generate_key(self.key_length);

            if self.repository.find_by_key(&key).await?.is_none() {
                return Ok(key);
            }
        }

        Err(AppError::keyspace_exhausted(
            json!({ "attempts": MAX_KEY_ATTEMPTS, "key_length": self.key_length }),
        ))
    }

    /// Generates a secret key no existing record uses.
    ///
    /// The reference behavior skipped this check, but a secret key collision
    /// would let one user administer another's link, so secret keys get the
    /// same uniqueness discipline as public keys.
    async fn generate_unique_secret_key(&self) -> Result<String, AppError> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let secret_key = generate_key(self.key_length);

            if self
                .repository
                .find_by_secret_key(&secret_key)
                .await?
                .is_none()
            {
                return Ok(secret_key);
            }
        }

        Err(AppError::keyspace_exhausted(
            json!({ "attempts": MAX_KEY_ATTEMPTS, "key_length": self.key_length }),
        ))
    }
}
