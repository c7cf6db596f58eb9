mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, build_test_app, get};

async fn seed_monitor(pool: &PgPool, title: &str, rating: f64, featured: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO monitors (title, resolution, refresh_rate, panel_type, screen_size, \
         price, rating, featured) \
         VALUES ($1, '2560x1440', 165, 'IPS', 27.0, 4000000, $2, $3) RETURNING id",
    )
    .bind(title)
    .bind(rating)
    .bind(featured)
    .fetch_one(pool)
    .await
    .expect("monitor seed should succeed")
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_monitors_orders_by_title(pool: PgPool) {
    let app = build_test_app(pool.clone());
    seed_monitor(&pool, "Zowie XL2546K", 4.5, false).await;
    seed_monitor(&pool, "AOC 24G2", 4.2, false).await;

    let response = get(app, "/api/v1/monitors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "AOC 24G2");
    assert_eq!(items[1]["title"], "Zowie XL2546K");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_featured_monitors_best_rated_first(pool: PgPool) {
    let app = build_test_app(pool.clone());
    seed_monitor(&pool, "AOC 24G2", 4.2, true).await;
    seed_monitor(&pool, "LG 27GP850", 4.8, true).await;
    seed_monitor(&pool, "Zowie XL2546K", 4.5, false).await;

    let response = get(app, "/api/v1/monitors?featured=true").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "LG 27GP850");
    assert_eq!(items[1]["title"], "AOC 24G2");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_monitor_by_id(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let id = seed_monitor(&pool, "LG 27GP850", 4.8, true).await;

    let response = get(app, &format!("/api/v1/monitors/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["refresh_rate"], 165);
    assert_eq!(json["data"]["panel_type"], "IPS");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_monitor_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/monitors/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
