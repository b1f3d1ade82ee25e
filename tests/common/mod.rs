#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;

use shortkey::application::services::RedirectService;
use shortkey::infrastructure::persistence::PgRedirectRepository;
use shortkey::state::AppState;

pub const TEST_BASE_URL: &str = "https://sho.rt";

pub async fn insert_redirect(pool: &PgPool, key: &str, secret_key: &str, target_url: &str) {
    sqlx::query("INSERT INTO redirects (key, secret_key, target_url) VALUES ($1, $2, $3)")
        .bind(key)
        .bind(secret_key)
        .bind(target_url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_inactive_redirect(
    pool: &PgPool,
    key: &str,
    secret_key: &str,
    target_url: &str,
) {
    sqlx::query(
        "INSERT INTO redirects (key, secret_key, target_url, is_active) \
         VALUES ($1, $2, $3, FALSE)",
    )
    .bind(key)
    .bind(secret_key)
    .bind(target_url)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn fetch_clicks(pool: &PgPool, key: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM redirects WHERE key = $1")
        .bind(key)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_is_active(pool: &PgPool, key: &str) -> bool {
    sqlx::query_scalar("SELECT is_active FROM redirects WHERE key = $1")
        .bind(key)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_service(pool: PgPool) -> Arc<RedirectService<PgRedirectRepository>> {
    let repository = Arc::new(PgRedirectRepository::new(Arc::new(pool)));
    Arc::new(RedirectService::new(repository, 8))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState {
        redirect_service: create_test_service(pool),
        base_url: TEST_BASE_URL.to_string(),
    }
}
