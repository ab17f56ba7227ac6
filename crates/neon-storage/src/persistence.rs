//! # Cart Persistence Adapter
//!
//! Bridges the cart's item list to a [`CartSlot`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Persistence Lifecycle                                │
//! │                                                                         │
//! │  Store opens ──► load() ──┬── slot empty ─────────► []                  │
//! │                           ├── valid JSON array ───► items               │
//! │                           └── read/parse error ───► [] + warn! log      │
//! │                                                                         │
//! │  Item mutation ──► save(items) ──┬── ok ────► slot overwritten          │
//! │                                  └── error ─► error! log, memory wins   │
//! │                                                                         │
//! │  Drawer open/close ──► (nothing persisted)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Format
//! A bare JSON array of cart items, no version field:
//! ```json
//! [{"productId":"cab-001","variantId":"upright","qty":1},{"productId":"pcb-002","qty":2}]
//! ```

use neon_core::CartItem;
use tracing::{debug, error, warn};

use crate::error::{StorageError, StorageResult};
use crate::slot::CartSlot;

/// Serializes a cart snapshot.
pub fn encode_items(items: &[CartItem]) -> StorageResult<String> {
    serde_json::to_string(items).map_err(StorageError::Encode)
}

/// Parses a cart snapshot read from slot `key`.
pub fn decode_items(key: &str, contents: &str) -> StorageResult<Vec<CartItem>> {
    serde_json::from_str(contents).map_err(|source| StorageError::CorruptSnapshot {
        key: key.to_string(),
        source,
    })
}

/// Loads and saves cart snapshots. Never surfaces an error to its caller.
#[derive(Debug)]
pub struct CartPersistence<S: CartSlot> {
    slot: S,
}

impl<S: CartSlot> CartPersistence<S> {
    pub fn new(slot: S) -> Self {
        CartPersistence { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Reads the persisted snapshot.
    ///
    /// Missing, unreadable and malformed slots all yield an empty list; the
    /// last two are logged.
    pub fn load(&self) -> Vec<CartItem> {
        match self.try_load() {
            Ok(items) => {
                debug!(slot = self.slot.key(), count = items.len(), "Cart snapshot loaded");
                items
            }
            Err(e) => {
                warn!(slot = self.slot.key(), error = %e, "Error loading cart, starting empty");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> StorageResult<Vec<CartItem>> {
        match self.slot.read()? {
            Some(contents) => decode_items(self.slot.key(), &contents),
            None => Ok(Vec::new()),
        }
    }

    /// Writes the full item list over the slot.
    ///
    /// Returns whether the write landed. A failed write is logged and the
    /// in-memory cart is left as is, so memory and slot may diverge.
    pub fn save(&mut self, items: &[CartItem]) -> bool {
        let result = encode_items(items).and_then(|json| self.slot.write(&json));
        match result {
            Ok(()) => true,
            Err(e) => {
                error!(slot = self.slot.key(), error = %e, "Error saving cart");
                false
            }
        }
    }
}
