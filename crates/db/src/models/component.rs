//! Component (PC part) row model and DTOs.

use npc_core::catalog::{MarketplaceLinks, Part, PartCategory};
use npc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Full row from the `components` table.
///
/// `category` is stored as the raw string tag; use [`Component::into_part`]
/// for the typed domain view. `marketplace_links` defaults to `None` when
/// the column is absent from the result set, which is what the legacy
/// payload shapes in the repository return.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Component {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub description: String,
    pub specs: String,
    #[sqlx(default)]
    pub marketplace_links: Option<Json<MarketplaceLinks>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Component {
    /// Convert to the domain [`Part`].
    ///
    /// Returns `None` when the stored category tag is not one of the
    /// eight fixed slots; such rows are dropped from the catalog rather
    /// than surfaced as errors.
    pub fn into_part(self) -> Option<Part> {
        let category = PartCategory::parse(&self.category)?;
        Some(Part {
            id: self.id,
            name: self.name,
            category,
            price: self.price,
            image_url: self.image_url,
            description: self.description,
            specs: self.specs,
            marketplace_links: self.marketplace_links.map(|Json(links)| links),
        })
    }
}

/// DTO for creating a component.
#[derive(Debug, Deserialize)]
pub struct CreateComponent {
    pub name: String,
    pub category: PartCategory,
    pub price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specs: String,
    #[serde(default)]
    pub marketplace_links: Option<MarketplaceLinks>,
}

/// DTO for updating a component. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateComponent {
    pub name: Option<String>,
    pub category: Option<PartCategory>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub specs: Option<String>,
    pub marketplace_links: Option<MarketplaceLinks>,
}
