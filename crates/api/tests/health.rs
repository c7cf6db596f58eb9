mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, build_test_app, get};

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_reports_ok(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_is_not_under_api_prefix(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
