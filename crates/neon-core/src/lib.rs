//! # neon-core: Pure Storefront Logic for Playback Neon
//!
//! This crate is the heart of the storefront. It holds the catalog model, the
//! cart reducer and the order math as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Playback Neon Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (presentation)                       │   │
//! │  │    Header ──► Landing ──► Catalog ──► Cart Drawer ──► Checkout  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartAction                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               neon-storage (CartStore, slots)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ neon-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │ catalog │ │  cart   │ │ totals  │  │   │
//! │  │   │ Product │ │  Money  │ │ Catalog │ │CartState│ │ Order   │  │   │
//! │  │   │ Variant │ │  Price  │ │ Lookup  │ │CartAction││ Summary │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Variant, Category, Collection)
//! - [`money`] - Integer money, currencies and catalog prices
//! - [`catalog`] - Read-only product collection with lookup by id
//! - [`cart`] - Cart state and its reducer
//! - [`totals`] - Tax, shipping and order totals
//! - [`validation`] - Catalog sanity checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use neon_core::cart::{CartAction, CartItem, CartState};
//!
//! let mut cart = CartState::default();
//! cart.apply(CartAction::AddItem(CartItem::new("A", None, 1)));
//! cart.apply(CartAction::AddItem(CartItem::new("A", None, 2)));
//!
//! assert_eq!(cart.item_count(), 3);
//! assert_eq!(cart.items().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartItem, CartKey, CartLine, CartState};
pub use catalog::{Catalog, ProductLookup};
pub use error::{CoreError, ValidationError};
pub use money::{Currency, Money, Price};
pub use totals::{OrderSummary, PricingRules};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the persistent slot holding the serialized cart items.
pub const CART_SLOT_KEY: &str = "playback-neon-cart";

/// How many featured products the landing page shows.
pub const FEATURED_LIMIT: usize = 3;
