//! # State Module
//!
//! Everything a storefront session holds between commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         AppState                                │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────────────┐ ┌──────────────────┐ ┌────────────────┐  │   │
//! │  │  │ StorefrontConfig │ │     Catalog      │ │   CartStore    │  │   │
//! │  │  │                  │ │                  │ │                │  │   │
//! │  │  │  brand, pricing  │ │  loaded once,    │ │  the only way  │  │   │
//! │  │  │  slot key, paths │ │  read-only       │ │  to mutate the │  │   │
//! │  │  │                  │ │                  │ │  cart          │  │   │
//! │  │  └──────────────────┘ └──────────────────┘ └────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Commands take `&mut AppState`. There is one session per process and   │
//! │  no shared ownership, so nothing here is locked.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{ConfigError, StorefrontConfig, DEFAULT_CATALOG_PATH};

use neon_core::error::CoreResult;
use neon_core::{Catalog, CoreError, Product, Variant};
use neon_storage::{CartSlot, CartStore, FileSlot, MemorySlot};
use tracing::info;

/// The cart slot behind the store: a file in the data dir, or memory only.
pub type SessionSlot = Box<dyn CartSlot>;

/// Session state handed to every command.
pub struct AppState {
    pub config: StorefrontConfig,
    pub catalog: Catalog,
    pub cart: CartStore<SessionSlot>,
}

impl AppState {
    pub fn new(config: StorefrontConfig, catalog: Catalog, slot: SessionSlot) -> Self {
        let cart = CartStore::open(slot);
        AppState {
            config,
            catalog,
            cart,
        }
    }

    /// Opens the session against the slot file in `config.data_dir`.
    pub fn with_file_slot(config: StorefrontConfig, catalog: Catalog) -> Self {
        let slot = FileSlot::new(&config.data_dir, &config.slot_key);
        info!(path = ?slot.path(), "Using cart slot file");
        AppState::new(config, catalog, Box::new(slot))
    }

    /// Opens the session with a cart that is forgotten on exit.
    pub fn ephemeral(config: StorefrontConfig, catalog: Catalog) -> Self {
        let slot = MemorySlot::new(config.slot_key.clone());
        AppState::new(config, catalog, Box::new(slot))
    }

    /// Finds a product by id or slug.
    pub fn product(&self, id_or_slug: &str) -> CoreResult<&Product> {
        self.catalog
            .resolve(id_or_slug)
            .ok_or_else(|| CoreError::ProductNotFound(id_or_slug.to_string()))
    }

    /// Finds a product and, when one is named, one of its variants.
    pub fn product_variant(
        &self,
        id_or_slug: &str,
        variant_id: Option<&str>,
    ) -> CoreResult<(&Product, Option<&Variant>)> {
        let product = self.product(id_or_slug)?;
        let variant = match variant_id {
            Some(variant_id) => Some(product.variant(variant_id).ok_or_else(|| {
                CoreError::VariantNotFound {
                    product_id: product.id.clone(),
                    variant_id: variant_id.to_string(),
                }
            })?),
            None => None,
        };
        Ok((product, variant))
    }
}
