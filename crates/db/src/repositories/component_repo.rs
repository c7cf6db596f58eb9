//! Repository for the `components` table.
//!
//! Write paths carry a marketplace-link payload-shape fallback: some
//! deployments predate the `marketplace_links` JSONB column (the oldest
//! only have a single `marketplace_link` TEXT column, or no link column
//! at all). Instead of nested error handling, writes walk an explicit
//! ordered list of payload shapes and stop at the first that the schema
//! accepts.

use npc_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::component::{Component, CreateComponent, UpdateComponent};

/// Column list for the current schema.
const COLUMNS: &str = "id, name, category, price, image_url, description, specs, \
                       marketplace_links, created_at, updated_at";

/// Column list for pre-JSONB schemas. `Component::marketplace_links`
/// falls back to its default (`None`) when the column is missing.
const LEGACY_COLUMNS: &str =
    "id, name, category, price, image_url, description, specs, created_at, updated_at";

/// Payload shapes for marketplace-link writes, tried in declaration
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkShape {
    /// Current schema: `marketplace_links` JSONB.
    LinksJson,
    /// Pre-JSONB schema: single `marketplace_link` TEXT column carrying
    /// the primary URL.
    LegacyText,
    /// Oldest schema: no link column; links are dropped from the write.
    Bare,
}

/// The fallback order. `LinksJson` first so fully-migrated databases
/// never pay for a failed attempt.
const LINK_SHAPES: [LinkShape; 3] = [LinkShape::LinksJson, LinkShape::LegacyText, LinkShape::Bare];

/// PostgreSQL "undefined column" (SQLSTATE 42703) -- the only error that
/// advances the fallback to the next shape. Anything else propagates.
fn is_undefined_column(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("42703"))
}

/// Provides CRUD operations for components.
pub struct ComponentRepo;

impl ComponentRepo {
    /// List all components ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Component>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM components ORDER BY name");
        sqlx::query_as::<_, Component>(&query).fetch_all(pool).await
    }

    /// List components with the given category tag, ordered by name.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Component>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM components WHERE category = $1 ORDER BY name");
        sqlx::query_as::<_, Component>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Find a component by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Component>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM components WHERE id = $1");
        sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new component, returning the created row.
    ///
    /// Walks the [`LINK_SHAPES`] fallback until the schema accepts the
    /// payload.
    pub async fn create(pool: &PgPool, input: &CreateComponent) -> Result<Component, sqlx::Error> {
        let mut last_err = None;
        for shape in LINK_SHAPES {
            match Self::insert_with_shape(pool, input, shape).await {
                Ok(row) => {
                    if shape != LinkShape::LinksJson {
                        tracing::warn!(
                            ?shape,
                            name = %input.name,
                            "components schema is missing marketplace_links; wrote with fallback shape"
                        );
                    }
                    return Ok(row);
                }
                Err(err) if is_undefined_column(&err) => last_err = Some(err),
                Err(err) => return Err(err),
            }
        }
        Err(last_err.expect("every shape was attempted"))
    }

    async fn insert_with_shape(
        pool: &PgPool,
        input: &CreateComponent,
        shape: LinkShape,
    ) -> Result<Component, sqlx::Error> {
        let query = match shape {
            LinkShape::LinksJson => format!(
                "INSERT INTO components \
                 (name, category, price, image_url, description, specs, marketplace_links) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLUMNS}"
            ),
            LinkShape::LegacyText => format!(
                "INSERT INTO components \
                 (name, category, price, image_url, description, specs, marketplace_link) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {LEGACY_COLUMNS}"
            ),
            LinkShape::Bare => format!(
                "INSERT INTO components \
                 (name, category, price, image_url, description, specs) \
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING {LEGACY_COLUMNS}"
            ),
        };

        let base = sqlx::query_as::<_, Component>(&query)
            .bind(&input.name)
            .bind(input.category.as_str())
            .bind(input.price)
            .bind(&input.image_url)
            .bind(&input.description)
            .bind(&input.specs);

        match shape {
            LinkShape::LinksJson => {
                base.bind(input.marketplace_links.as_ref().map(Json))
                    .fetch_one(pool)
                    .await
            }
            LinkShape::LegacyText => {
                let primary = input.marketplace_links.as_ref().and_then(|l| l.primary());
                base.bind(primary).fetch_one(pool).await
            }
            LinkShape::Bare => base.fetch_one(pool).await,
        }
    }

    /// Update a component. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. Uses the same
    /// payload-shape fallback as [`Self::create`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComponent,
    ) -> Result<Option<Component>, sqlx::Error> {
        let mut last_err = None;
        for shape in LINK_SHAPES {
            match Self::update_with_shape(pool, id, input, shape).await {
                Ok(row) => {
                    if shape != LinkShape::LinksJson {
                        tracing::warn!(
                            ?shape,
                            component_id = id,
                            "components schema is missing marketplace_links; updated with fallback shape"
                        );
                    }
                    return Ok(row);
                }
                Err(err) if is_undefined_column(&err) => last_err = Some(err),
                Err(err) => return Err(err),
            }
        }
        Err(last_err.expect("every shape was attempted"))
    }

    async fn update_with_shape(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComponent,
        shape: LinkShape,
    ) -> Result<Option<Component>, sqlx::Error> {
        let query = match shape {
            LinkShape::LinksJson => format!(
                "UPDATE components SET \
                    name = COALESCE($2, name), \
                    category = COALESCE($3, category), \
                    price = COALESCE($4, price), \
                    image_url = COALESCE($5, image_url), \
                    description = COALESCE($6, description), \
                    specs = COALESCE($7, specs), \
                    marketplace_links = COALESCE($8, marketplace_links), \
                    updated_at = NOW() \
                 WHERE id = $1 RETURNING {COLUMNS}"
            ),
            LinkShape::LegacyText => format!(
                "UPDATE components SET \
                    name = COALESCE($2, name), \
                    category = COALESCE($3, category), \
                    price = COALESCE($4, price), \
                    image_url = COALESCE($5, image_url), \
                    description = COALESCE($6, description), \
                    specs = COALESCE($7, specs), \
                    marketplace_link = COALESCE($8, marketplace_link), \
                    updated_at = NOW() \
                 WHERE id = $1 RETURNING {LEGACY_COLUMNS}"
            ),
            LinkShape::Bare => format!(
                "UPDATE components SET \
                    name = COALESCE($2, name), \
                    category = COALESCE($3, category), \
                    price = COALESCE($4, price), \
                    image_url = COALESCE($5, image_url), \
                    description = COALESCE($6, description), \
                    specs = COALESCE($7, specs), \
                    updated_at = NOW() \
                 WHERE id = $1 RETURNING {LEGACY_COLUMNS}"
            ),
        };

        let base = sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.category.map(|c| c.as_str()))
            .bind(input.price)
            .bind(&input.image_url)
            .bind(&input.description)
            .bind(&input.specs);

        match shape {
            LinkShape::LinksJson => {
                base.bind(input.marketplace_links.as_ref().map(Json))
                    .fetch_optional(pool)
                    .await
            }
            LinkShape::LegacyText => {
                let primary = input.marketplace_links.as_ref().and_then(|l| l.primary());
                base.bind(primary).fetch_optional(pool).await
            }
            LinkShape::Bare => base.fetch_optional(pool).await,
        }
    }

    /// Delete a component. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM components WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The shape order is the documented retry policy: current schema
    /// first, then the legacy single-link column, then dropping links.
    #[test]
    fn test_fallback_shape_order() {
        assert_eq!(
            LINK_SHAPES,
            [LinkShape::LinksJson, LinkShape::LegacyText, LinkShape::Bare]
        );
    }

    #[test]
    fn test_row_not_found_does_not_advance_fallback() {
        assert!(!is_undefined_column(&sqlx::Error::RowNotFound));
    }
}
