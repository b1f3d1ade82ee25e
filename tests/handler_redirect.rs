mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;

use shortkey::api::handlers::redirect_handler;

fn test_app(pool: PgPool) -> Router {
    Router::new()
        .route("/{key}", get(redirect_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    common::insert_redirect(&pool, "AbC12xYz", "sec00001", "https://example.com/target").await;

    let server = TestServer::new(test_app(pool)).unwrap();

    let response = server.get("/AbC12xYz").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_counts_click(pool: PgPool) {
    common::insert_redirect(&pool, "clickme1", "sec00002", "https://example.com").await;

    let server = TestServer::new(test_app(pool.clone())).unwrap();

    assert_eq!(common::fetch_clicks(&pool, "clickme1").await, 0);

    let first = server.get("/clickme1").await;
    assert_eq!(first.status_code(), 307);
    assert_eq!(common::fetch_clicks(&pool, "clickme1").await, 1);

    let second = server.get("/clickme1").await;
    assert_eq!(second.status_code(), 307);
    assert_eq!(common::fetch_clicks(&pool, "clickme1").await, 2);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = TestServer::new(test_app(pool)).unwrap();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_deactivated_matches_never_existed(pool: PgPool) {
    common::insert_inactive_redirect(&pool, "disabled", "sec00003", "https://example.com").await;

    let server = TestServer::new(test_app(pool.clone())).unwrap();

    let deactivated = server.get("/disabled").await;
    let missing = server.get("/nosuchkey").await;

    deactivated.assert_status_not_found();
    missing.assert_status_not_found();

    // Same outcome shape: a disabled link cannot be probed.
    let deactivated_body: serde_json::Value = deactivated.json();
    let missing_body: serde_json::Value = missing.json();
    assert_eq!(
        deactivated_body["error"]["code"],
        missing_body["error"]["code"]
    );
    assert_eq!(
        deactivated_body["error"]["message"],
        missing_body["error"]["message"]
    );

    // And the click counter stays untouched.
    assert_eq!(common::fetch_clicks(&pool, "disabled").await, 0);
}

#[sqlx::test]
async fn test_concurrent_redirects_lose_no_clicks(pool: PgPool) {
    common::insert_redirect(&pool, "parallel", "sec00004", "https://example.com").await;

    let service = common::create_test_service(pool.clone());

    const RESOLVERS: usize = 50;
    let mut handles = Vec::with_capacity(RESOLVERS);

    for _ in 0..RESOLVERS {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.resolve_for_redirect("parallel").await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    assert_eq!(common::fetch_clicks(&pool, "parallel").await, RESOLVERS as i64);
}
