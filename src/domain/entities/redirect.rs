//! Redirect record entity: a short key mapped to a target URL.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// `key` is the public short key used in redirect URLs; `secret_key` is the
/// administration capability handed to the creator exactly once. Both are
/// globally unique and immutable after creation. Only two fields ever
/// change: `clicks` grows by one per successful redirect, and `is_active`
/// flips to `false` on deactivation and never back.
#[derive(Debug, Clone)]
pub struct RedirectRecord {
    pub id: i64,
    pub key: String,
    pub secret_key: String,
    pub target_url: String,
    pub is_active: bool,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl RedirectRecord {
    /// Creates a new RedirectRecord instance.
    pub fn new(
        id: i64,
        key: String,
        secret_key: String,
        target_url: String,
        is_active: bool,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            key,
            secret_key,
            target_url,
            is_active,
            clicks,
            created_at,
        }
    }

    /// Returns true if the record still resolves through the public key.
    pub fn is_resolvable(&self) -> bool {
        self.is_active
    }
}

/// Input data for persisting a new redirect record.
///
/// `is_active = true` and `clicks = 0` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewRedirect {
    pub key: String,
    pub secret_key: String,
    pub target_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let now = Utc::now();
        let record = RedirectRecord::new(
            1,
            "AbC12xYz".to_string(),
            "Zz9yX21a".to_string(),
            "https://example.com".to_string(),
            true,
            0,
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.key, "AbC12xYz");
        assert_eq!(record.secret_key, "Zz9yX21a");
        assert_eq!(record.target_url, "https://example.com");
        assert!(record.is_resolvable());
        assert_eq!(record.clicks, 0);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_deactivated_record_is_not_resolvable() {
        let record = RedirectRecord::new(
            2,
            "key00001".to_string(),
            "sec00001".to_string(),
            "https://example.com".to_string(),
            false,
            7,
            Utc::now(),
        );

        assert!(!record.is_resolvable());
    }
}
