//! Catalog domain types: part categories, parts, and marketplace links.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// The eight fixed build slots.
///
/// Declaration order is significant: it drives slot display order and the
/// row order of the exported build sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    #[serde(rename = "CPU")]
    Cpu,
    Motherboard,
    #[serde(rename = "GPU")]
    Gpu,
    #[serde(rename = "RAM")]
    Ram,
    Storage,
    #[serde(rename = "PSU")]
    Psu,
    Case,
    Cooler,
}

impl PartCategory {
    /// All categories in display/export order.
    pub const ALL: [PartCategory; 8] = [
        PartCategory::Cpu,
        PartCategory::Motherboard,
        PartCategory::Gpu,
        PartCategory::Ram,
        PartCategory::Storage,
        PartCategory::Psu,
        PartCategory::Case,
        PartCategory::Cooler,
    ];

    /// The string tag used in the database, API payloads, and the export
    /// sheet (`"CPU"`, `"Motherboard"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            PartCategory::Cpu => "CPU",
            PartCategory::Motherboard => "Motherboard",
            PartCategory::Gpu => "GPU",
            PartCategory::Ram => "RAM",
            PartCategory::Storage => "Storage",
            PartCategory::Psu => "PSU",
            PartCategory::Case => "Case",
            PartCategory::Cooler => "Cooler",
        }
    }

    /// Parse a string tag. Returns `None` for anything outside the fixed
    /// set of eight categories.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }

    /// Position of this category in [`Self::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PartCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-marketplace product links. Every entry is optional; a part with no
/// links at all omits the mapping entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokopedia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazada: Option<String>,
}

impl MarketplaceLinks {
    /// The first available link in marketplace priority order (shopee,
    /// tokopedia, lazada). This is the URL surfaced as the buy button.
    pub fn primary(&self) -> Option<&str> {
        self.shopee
            .as_deref()
            .or(self.tokopedia.as_deref())
            .or(self.lazada.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.shopee.is_none() && self.tokopedia.is_none() && self.lazada.is_none()
    }
}

/// A catalog entry.
///
/// Immutable once fetched: the build wizard only ever references a part,
/// it never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: DbId,
    pub name: String,
    pub category: PartCategory,
    /// Price in IDR, zero decimal places.
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub description: String,
    /// Free-text spec bullets, newline-delimited. The socket heuristic in
    /// [`crate::builder`] reads this.
    pub specs: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace_links: Option<MarketplaceLinks>,
}
