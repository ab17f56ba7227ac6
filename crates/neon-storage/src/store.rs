//! # Cart Store
//!
//! Owns the [`CartState`] and its persistence adapter, and is the only way
//! the presentation layer mutates the cart.
//!
//! ## Ownership
//! There is exactly one `CartStore` per session. It is created at startup
//! and handed by `&mut` to whatever needs to dispatch; there is no global
//! and no lock. All operations run to completion synchronously.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore::open(slot)                                                  │
//! │       │  CartState::default() + LoadCart(persisted snapshot)            │
//! │       ▼                                                                 │
//! │  store.dispatch(action)                                                 │
//! │       │  state.apply(action)                                            │
//! │       │  action.touches_items()? ──► persistence.save(items)            │
//! │       ▼                                                                 │
//! │  store.state() ──► render                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use neon_core::{CartAction, CartItem, CartState, Money, ProductLookup};
use tracing::{debug, info};

use crate::persistence::CartPersistence;
use crate::slot::CartSlot;

#[derive(Debug)]
pub struct CartStore<S: CartSlot> {
    state: CartState,
    persistence: CartPersistence<S>,
}

impl<S: CartSlot> CartStore<S> {
    /// Creates the store and restores the persisted snapshot, once.
    pub fn open(slot: S) -> Self {
        let persistence = CartPersistence::new(slot);
        let mut state = CartState::default();
        state.apply(CartAction::LoadCart(persistence.load()));

        info!(
            slot = persistence.slot().key(),
            lines = state.line_count(),
            items = state.item_count(),
            "Cart store opened"
        );

        CartStore { state, persistence }
    }

    /// Applies an action and persists the item list if it changed.
    pub fn dispatch(&mut self, action: CartAction) {
        let persist = action.touches_items();
        debug!(action = action.name(), "Cart dispatch");

        self.state.apply(action);

        if persist {
            self.persistence.save(self.state.items());
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn slot(&self) -> &S {
        self.persistence.slot()
    }

    // -------------------------------------------------------------------------
    // Named operations
    // -------------------------------------------------------------------------

    pub fn add_item(&mut self, item: CartItem) {
        self.dispatch(CartAction::AddItem(item));
    }

    /// Removes every line of `product_id`; `variant_id` is passed through
    /// but not used for matching.
    pub fn remove_item(&mut self, product_id: &str, variant_id: Option<&str>) {
        self.dispatch(CartAction::RemoveItem {
            product_id: product_id.to_string(),
            variant_id: variant_id.map(str::to_string),
        });
    }

    pub fn update_quantity(&mut self, product_id: &str, variant_id: Option<&str>, qty: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id: product_id.to_string(),
            variant_id: variant_id.map(str::to_string),
            qty,
        });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    pub fn open_cart(&mut self) {
        self.dispatch(CartAction::OpenCart);
    }

    pub fn close_cart(&mut self) {
        self.dispatch(CartAction::CloseCart);
    }

    pub fn toggle_cart(&mut self) {
        self.dispatch(CartAction::ToggleCart);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    pub fn subtotal<L>(&self, catalog: &L) -> Money
    where
        L: ProductLookup + ?Sized,
    {
        self.state.subtotal(catalog)
    }
}
