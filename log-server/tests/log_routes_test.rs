//! Sidecar route tests against a temp-file SQLite database.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use log_server::router;
use storage::{LogRepository, SqlitePoolManager};
use tempfile::TempDir;
use tower::ServiceExt;

fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("logs.db").display())
}

async fn repo() -> (TempDir, LogRepository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = LogRepository::new(&database_url(&dir)).await.unwrap();
    (dir, repo)
}

fn post_log(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/log")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// **Test: A complete entry is stored as exactly one row and acknowledged with 201.**
#[tokio::test]
async fn test_full_entry_writes_one_row() {
    let (_dir, repo) = repo().await;

    let response = router(repo.clone())
        .oneshot(post_log(
            r#"{"userId":"defaultUser","message":"How do I print?","timestamp":"2024-05-01T10:00:00.000Z"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Log saved successfully");
    assert_eq!(repo.count().await.unwrap(), 1);
}

/// **Test: Any missing, null or blank field is a 400 and writes nothing.**
#[tokio::test]
async fn test_missing_field_writes_nothing() {
    let (_dir, repo) = repo().await;

    let bodies = [
        r#"{"message":"hi","timestamp":"2024-05-01T10:00:00Z"}"#,
        r#"{"userId":"u","timestamp":"2024-05-01T10:00:00Z"}"#,
        r#"{"userId":"u","message":"hi"}"#,
        r#"{"userId":null,"message":"hi","timestamp":"2024-05-01T10:00:00Z"}"#,
        r#"{"userId":"u","message":"","timestamp":"2024-05-01T10:00:00Z"}"#,
    ];
    for body in bodies {
        let response = router(repo.clone()).oneshot(post_log(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing userId, message or timestamp");
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

/// **Test: Malformed JSON is a 400.**
#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (_dir, repo) = repo().await;

    let response = router(repo.clone())
        .oneshot(post_log("{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(repo.count().await.unwrap(), 0);
}

/// **Test: Each accepted request appends; rows are never merged.**
#[tokio::test]
async fn test_repeated_entries_append() {
    let (_dir, repo) = repo().await;
    let body = r#"{"userId":"u","message":"same","timestamp":"2024-05-01T10:00:00Z"}"#;

    for _ in 0..3 {
        let response = router(repo.clone()).oneshot(post_log(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    assert_eq!(repo.count().await.unwrap(), 3);
}

/// **Test: A failing insert is a 500 with a generic body and leaves the table unchanged.**
#[tokio::test]
async fn test_storage_failure_is_server_error() {
    let (dir, repo) = repo().await;
    let admin = SqlitePoolManager::new(&database_url(&dir)).await.unwrap();
    sqlx::query(
        "CREATE TRIGGER reject_inserts BEFORE INSERT ON user_logs \
         BEGIN SELECT RAISE(ABORT, 'disk full'); END",
    )
    .execute(admin.pool())
    .await
    .unwrap();

    let response = router(repo.clone())
        .oneshot(post_log(
            r#"{"userId":"u","message":"hi","timestamp":"2024-05-01T10:00:00Z"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Database error");
    assert_eq!(repo.count().await.unwrap(), 0);
}
