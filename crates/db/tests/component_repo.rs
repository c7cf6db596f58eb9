//! Schema-fallback tests for component writes.
//!
//! The bundled migrations always carry the `marketplace_links` JSONB
//! column, so these tests degrade the schema by hand to put the
//! repository on its legacy write paths.

use npc_core::catalog::{MarketplaceLinks, PartCategory};
use npc_db::models::component::{CreateComponent, UpdateComponent};
use npc_db::repositories::ComponentRepo;
use sqlx::PgPool;

fn shopee_only(url: &str) -> MarketplaceLinks {
    MarketplaceLinks {
        shopee: Some(url.to_string()),
        tokopedia: None,
        lazada: None,
    }
}

fn new_cpu(name: &str, links: Option<MarketplaceLinks>) -> CreateComponent {
    CreateComponent {
        name: name.to_string(),
        category: PartCategory::Cpu,
        price: 3_500_000,
        image_url: None,
        description: String::new(),
        specs: "Socket AM5".to_string(),
        marketplace_links: links,
    }
}

fn price_patch(price: i64) -> UpdateComponent {
    UpdateComponent {
        name: None,
        category: None,
        price: Some(price),
        image_url: None,
        description: None,
        specs: None,
        marketplace_links: None,
    }
}

/// Degrade to the oldest schema: no link column of any kind.
async fn drop_links_column(pool: &PgPool) {
    sqlx::query("ALTER TABLE components DROP COLUMN marketplace_links")
        .execute(pool)
        .await
        .expect("column drop should succeed");
}

/// Degrade to the intermediate schema: a single `marketplace_link` TEXT
/// column instead of the JSONB mapping.
async fn swap_to_legacy_text_column(pool: &PgPool) {
    drop_links_column(pool).await;
    sqlx::query("ALTER TABLE components ADD COLUMN marketplace_link TEXT")
        .execute(pool)
        .await
        .expect("column add should succeed");
}

#[sqlx::test(migrations = "./migrations")]
async fn create_falls_back_to_bare_without_any_link_column(pool: PgPool) {
    drop_links_column(&pool).await;

    let created = ComponentRepo::create(
        &pool,
        &new_cpu("Ryzen 5 7600", Some(shopee_only("https://shopee.example/7600"))),
    )
    .await
    .expect("create should survive the missing column");

    // Links are dropped from the write; everything else lands.
    assert_eq!(created.name, "Ryzen 5 7600");
    assert_eq!(created.price, 3_500_000);
    assert!(created.marketplace_links.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn create_writes_primary_url_to_legacy_text_column(pool: PgPool) {
    swap_to_legacy_text_column(&pool).await;

    let created = ComponentRepo::create(
        &pool,
        &new_cpu("Ryzen 5 7600", Some(shopee_only("https://shopee.example/7600"))),
    )
    .await
    .expect("create should use the legacy column");

    assert!(created.marketplace_links.is_none());

    let stored: Option<String> =
        sqlx::query_scalar("SELECT marketplace_link FROM components WHERE id = $1")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .expect("legacy column should be readable");
    assert_eq!(stored.as_deref(), Some("https://shopee.example/7600"));
}

#[sqlx::test(migrations = "./migrations")]
async fn create_without_links_still_walks_fallback(pool: PgPool) {
    swap_to_legacy_text_column(&pool).await;

    let created = ComponentRepo::create(&pool, &new_cpu("Ryzen 5 7600", None))
        .await
        .expect("create should succeed with no links at all");

    let stored: Option<String> =
        sqlx::query_scalar("SELECT marketplace_link FROM components WHERE id = $1")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .expect("legacy column should be readable");
    assert_eq!(stored, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_falls_back_without_any_link_column(pool: PgPool) {
    drop_links_column(&pool).await;

    let created = ComponentRepo::create(&pool, &new_cpu("Ryzen 5 7600", None))
        .await
        .expect("seed create should succeed");

    let updated = ComponentRepo::update(&pool, created.id, &price_patch(3_200_000))
        .await
        .expect("update should survive the missing column")
        .expect("row exists");

    assert_eq!(updated.price, 3_200_000);
    assert_eq!(updated.name, "Ryzen 5 7600");
}

#[sqlx::test(migrations = "./migrations")]
async fn non_undefined_column_error_does_not_advance_fallback(pool: PgPool) {
    // A check-constraint violation on the first shape must propagate as
    // is; only an undefined column moves the write to the next shape.
    let mut input = new_cpu("Broken", None);
    input.price = -1;

    let err = ComponentRepo::create(&pool, &input)
        .await
        .expect_err("negative price violates ck_components_price");

    match err {
        sqlx::Error::Database(db) => {
            assert_eq!(db.code().as_deref(), Some("23514"), "check violation");
        }
        other => panic!("expected a database error, got: {other:?}"),
    }
}
