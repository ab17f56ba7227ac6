//! # neon-storage: Durable State for Playback Neon
//!
//! Everything that reads or writes outside process memory lives here: the
//! cart slot, the cart persistence adapter, the cart store that ties the
//! reducer to the slot, and the catalog loader.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Playback Neon Data Flow                              │
//! │                                                                         │
//! │  Storefront command (add, set, remove, ...)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  neon-storage (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌─────────────────┐   ┌───────────────┐   │   │
//! │  │   │  CartStore   │──►│ CartPersistence │──►│   CartSlot    │   │   │
//! │  │   │ (store.rs)   │   │(persistence.rs) │   │  (slot.rs)    │   │   │
//! │  │   └──────────────┘   └─────────────────┘   └───────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐                                              │   │
//! │  │   │CatalogLoader │ ◄── products.json                           │   │
//! │  │   │ (loader.rs)  │                                              │   │
//! │  │   └──────────────┘                                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neon_core::{CartItem, CART_SLOT_KEY};
//! use neon_storage::{CartStore, FileSlot};
//!
//! let mut store = CartStore::open(FileSlot::new("/tmp/neon", CART_SLOT_KEY));
//! store.add_item(CartItem::new("cab-001", None, 1));
//! assert!(store.item_count() >= 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loader;
pub mod persistence;
pub mod slot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use loader::CatalogLoader;
pub use persistence::CartPersistence;
pub use slot::{CartSlot, FileSlot, MemorySlot};
pub use store::CartStore;
