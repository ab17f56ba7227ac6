//! # Domain Types
//!
//! Catalog types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐ 1   * ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │──────►│    Variant      │   │   Collection    │   │
//! │  │  ─────────────  │       │  ─────────────  │   │  ─────────────  │   │
//! │  │  id, slug       │       │  id, title      │   │  slug           │   │
//! │  │  price (Price)  │       │  price (Price)  │   │  productIds ────┼─► │
//! │  │  category       │       │  stock, sku?    │   └─────────────────┘   │
//! │  │  featured?      │       │  image?         │                         │
//! │  └─────────────────┘       └─────────────────┘                         │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Category     │   │    TaxRate      │                             │
//! │  │  cabinet, pcb,  │   │  bps (u32)      │                             │
//! │  │  controller,    │   │  800 = 8%       │                             │
//! │  │  artwork        │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are owned by the catalog and are immutable from the cart's
//! point of view. The cart only ever stores `(productId, variantId, qty)`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::catalog::ProductLookup;
use crate::error::ValidationError;
use crate::money::Price;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (8.0 = 8%).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Creates a tax rate from a fraction (0.08 = 8%).
    pub fn from_fraction(fraction: f64) -> Self {
        TaxRate((fraction * 10_000.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category. Closed set, lowercase in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cabinet,
    Pcb,
    Controller,
    Artwork,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 4] = [
        Category::Cabinet,
        Category::Pcb,
        Category::Controller,
        Category::Artwork,
    ];

    /// Identifier as it appears in JSON and URLs.
    pub const fn id(&self) -> &'static str {
        match self {
            Category::Cabinet => "cabinet",
            Category::Pcb => "pcb",
            Category::Controller => "controller",
            Category::Artwork => "artwork",
        }
    }

    /// Human-readable name for navigation and category tiles.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Category::Cabinet => "Arcade Cabinets",
            Category::Pcb => "PCB Boards",
            Category::Controller => "Controllers",
            Category::Artwork => "Artwork & Marquees",
        }
    }

    /// One-line blurb for the landing page tile.
    pub const fn blurb(&self) -> &'static str {
        match self {
            Category::Cabinet => "Fully restored vintage arcade machines",
            Category::Pcb => "Original and reproduction game boards",
            Category::Controller => "Premium joysticks and button kits",
            Category::Artwork => "Authentic cabinet artwork and marquees",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.id().to_string()).collect(),
            })
    }
}

// =============================================================================
// Variant
// =============================================================================

/// A purchasable variation of a product (cabinet style, button colour, ...).
///
/// Its price overrides the product's base price when a cart item names it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub title: String,

    /// Option name -> value, e.g. `{"Color": "Red"}`.
    #[serde(default)]
    pub options: BTreeMap<String, String>,

    pub price: Price,

    /// Units on hand. Informational only: the cart does not enforce it.
    pub stock: i64,

    /// Image override for this variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sku: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,

    /// Base price, used when no variant is selected or the variant is unknown.
    pub price: Price,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub category: Category,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,

    /// Free-form spec sheet, e.g. `{"Monitor": "19\" CRT"}`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specs: BTreeMap<String, String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Finds a variant by id.
    pub fn variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    /// The variant preselected by one-click "add to cart": the first one.
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    /// Resolves the variant a cart item points at, if any.
    fn resolve_variant(&self, variant_id: Option<&str>) -> Option<&Variant> {
        variant_id.and_then(|id| self.variant(id))
    }

    /// Unit price for a cart line.
    ///
    /// ## Resolution Rule
    /// ```text
    /// variant_id is Some AND product has that variant ──► variant.price
    /// otherwise (None, or unknown variant id)       ──► product.price
    /// ```
    pub fn unit_price(&self, variant_id: Option<&str>) -> Price {
        self.resolve_variant(variant_id)
            .map(|v| v.price)
            .unwrap_or(self.price)
    }

    /// Title for a cart line: `"<product> - <variant>"` when the variant resolves.
    pub fn line_title(&self, variant_id: Option<&str>) -> String {
        match self.resolve_variant(variant_id) {
            Some(variant) => format!("{} - {}", self.title, variant.title),
            None => self.title.clone(),
        }
    }

    /// Image for a cart line: variant override, else the first product image.
    pub fn line_image(&self, variant_id: Option<&str>) -> Option<&str> {
        self.resolve_variant(variant_id)
            .and_then(|v| v.image.as_deref())
            .or_else(|| self.images.first().map(String::as_str))
    }

    /// The cart item produced by the landing page's one-click "add to cart":
    /// first variant (if any), quantity 1.
    pub fn quick_add_item(&self) -> CartItem {
        CartItem::new(
            self.id.clone(),
            self.default_variant().map(|v| v.id.clone()),
            1,
        )
    }
}

// =============================================================================
// Collection
// =============================================================================

/// A curated group of products (e.g. "Golden Age Classics").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub image: String,
    pub product_ids: Vec<String>,
}

impl Collection {
    /// Resolves the collection's products in listed order.
    ///
    /// Ids missing from the catalog are skipped, the same way the cart
    /// tolerates dangling references.
    pub fn products<'a, L>(&self, lookup: &'a L) -> Vec<&'a Product>
    where
        L: ProductLookup + ?Sized,
    {
        self.product_ids
            .iter()
            .filter_map(|id| lookup.product(id))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::money::Price;

    /// Builds a product with an optional list of `(variant id, price cents)`.
    pub(crate) fn product(id: &str, price_cents: i64, variants: &[(&str, i64)]) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("{}-slug", id),
            title: format!("Product {}", id),
            description: String::new(),
            price: Price::usd(price_cents),
            images: vec![format!("/img/{}.jpg", id)],
            tags: Vec::new(),
            category: Category::Cabinet,
            variants: variants
                .iter()
                .map(|(vid, cents)| Variant {
                    id: vid.to_string(),
                    title: format!("Variant {}", vid),
                    options: BTreeMap::new(),
                    price: Price::usd(*cents),
                    stock: 5,
                    image: None,
                    sku: None,
                })
                .collect(),
            specs: BTreeMap::new(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            featured: false,
        }
    }

    #[test]
    fn test_tax_rate_constructors() {
        assert_eq!(TaxRate::from_bps(800).bps(), 800);
        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
        assert_eq!(TaxRate::from_fraction(0.08).bps(), 800);
        assert!((TaxRate::from_bps(825).percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_category_parse_and_names() {
        assert_eq!("PCB".parse::<Category>().unwrap(), Category::Pcb);
        assert_eq!(Category::Artwork.display_name(), "Artwork & Marquees");
        assert!("pinball".parse::<Category>().is_err());
    }

    #[test]
    fn test_unit_price_prefers_matching_variant() {
        let p = product("A", 10_000, &[("v1", 15_000)]);
        assert_eq!(p.unit_price(None).amount.cents(), 10_000);
        assert_eq!(p.unit_price(Some("v1")).amount.cents(), 15_000);
        // Unknown variant falls back to base price
        assert_eq!(p.unit_price(Some("nope")).amount.cents(), 10_000);
    }

    #[test]
    fn test_line_title_and_image() {
        let mut p = product("A", 100, &[("v1", 200)]);
        p.variants[0].image = Some("/img/v1.jpg".to_string());

        assert_eq!(p.line_title(None), "Product A");
        assert_eq!(p.line_title(Some("v1")), "Product A - Variant v1");
        assert_eq!(p.line_image(Some("v1")), Some("/img/v1.jpg"));
        assert_eq!(p.line_image(None), Some("/img/A.jpg"));
    }

    #[test]
    fn test_quick_add_item_uses_first_variant() {
        let with_variants = product("A", 100, &[("v1", 200), ("v2", 300)]);
        let item = with_variants.quick_add_item();
        assert_eq!(item.product_id, "A");
        assert_eq!(item.variant_id.as_deref(), Some("v1"));
        assert_eq!(item.qty, 1);

        let plain = product("B", 100, &[]);
        assert_eq!(plain.quick_add_item().variant_id, None);
    }

    #[test]
    fn test_product_json_optional_fields() {
        let json = r#"{
            "id": "pcb-001",
            "slug": "galaga-pcb",
            "title": "Galaga PCB",
            "description": "Original board",
            "price": { "amount": 349.5, "currency": "USD" },
            "images": ["/img/galaga.jpg"],
            "tags": ["namco"],
            "category": "pcb",
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.category, Category::Pcb);
        assert_eq!(p.price.amount.cents(), 34_950);
        assert!(p.variants.is_empty());
        assert!(p.specs.is_empty());
        assert!(!p.featured);
    }

    #[test]
    fn test_collection_skips_unknown_products() {
        let catalog = vec![product("A", 100, &[]), product("B", 200, &[])];
        let collection = Collection {
            id: "c1".to_string(),
            title: "Classics".to_string(),
            description: String::new(),
            slug: "classics".to_string(),
            image: String::new(),
            product_ids: vec!["B".to_string(), "missing".to_string(), "A".to_string()],
        };

        let ids: Vec<&str> = collection
            .products(catalog.as_slice())
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["B", "A"]);
    }
}
