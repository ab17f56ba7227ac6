//! # Cart
//!
//! The shopping cart as a reducer: a closed set of [`CartAction`]s applied to
//! a [`CartState`].
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Reducer                                         │
//! │                                                                         │
//! │  UI Gesture            CartAction               State Change            │
//! │  ──────────            ──────────               ────────────            │
//! │                                                                         │
//! │  Click "Add" ────────► AddItem(item) ─────────► qty += n  or  push      │
//! │                                                                         │
//! │  Click "+" / "-" ────► UpdateQuantity(p,v,n) ─► qty = n  (n<=0: drop)   │
//! │                                                                         │
//! │  Click "Remove" ─────► RemoveItem(p, _) ──────► drop every p entry      │
//! │                                                                         │
//! │  Click "Clear" ──────► ClearCart ─────────────► items = []              │
//! │                                                                         │
//! │  Cart icon ──────────► Open/Close/ToggleCart ─► is_open flips           │
//! │                                                                         │
//! │  Startup ────────────► LoadCart(snapshot) ────► items = snapshot        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `(product_id, variant_id)`
//! - A stored quantity is always >= 1
//! - Items only come from actions; nothing is fabricated
//!
//! No operation can fail. There is no stock check and no upper bound on
//! quantity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::ProductLookup;
use crate::money::{Money, Price};

// =============================================================================
// Cart Item
// =============================================================================

/// One line of the cart: a product, an optional variant and a quantity.
///
/// ## JSON Shape (persisted)
/// ```json
/// { "productId": "cab-001", "variantId": "upright", "qty": 2 }
/// ```
/// Prices are NOT stored: they are resolved against the catalog at read time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub variant_id: Option<String>,

    pub qty: i64,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, variant_id: Option<String>, qty: i64) -> Self {
        CartItem {
            product_id: product_id.into(),
            variant_id,
            qty,
        }
    }

    pub fn key(&self) -> CartKey<'_> {
        CartKey {
            product_id: &self.product_id,
            variant_id: self.variant_id.as_deref(),
        }
    }

    /// Checks the composite `(product_id, variant_id)` key.
    pub fn matches(&self, product_id: &str, variant_id: Option<&str>) -> bool {
        self.key() == CartKey { product_id, variant_id }
    }

    fn same_key(&self, other: &CartItem) -> bool {
        self.key() == other.key()
    }
}

/// Borrowed identity of a cart line.
///
/// `("A", None)` and `("A", Some("v1"))` are different lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartKey<'a> {
    pub product_id: &'a str,
    pub variant_id: Option<&'a str>,
}

// =============================================================================
// Cart Action
// =============================================================================

/// Every transition the cart knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `qty` to the matching entry, or append a new one.
    AddItem(CartItem),

    /// Remove every entry for `product_id`.
    ///
    /// `variant_id` is accepted but not consulted: all variants of the
    /// product go. This is broader than the `(product, variant)` key the
    /// other actions use and is kept that way until the intended behaviour
    /// is settled.
    RemoveItem {
        product_id: String,
        variant_id: Option<String>,
    },

    /// Set the matching entry's quantity to exactly `qty`; `qty <= 0` removes it.
    UpdateQuantity {
        product_id: String,
        variant_id: Option<String>,
        qty: i64,
    },

    ClearCart,
    ToggleCart,
    OpenCart,
    CloseCart,

    /// Replace the item list with a restored snapshot.
    LoadCart(Vec<CartItem>),
}

impl CartAction {
    /// Whether this action is an item mutation that must be persisted.
    ///
    /// Drawer actions only touch the visibility flag. `LoadCart` replays
    /// what was just read from the slot, so writing it back is pointless.
    pub fn touches_items(&self) -> bool {
        matches!(
            self,
            CartAction::AddItem(_)
                | CartAction::RemoveItem { .. }
                | CartAction::UpdateQuantity { .. }
                | CartAction::ClearCart
        )
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem { .. } => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::ClearCart => "clear_cart",
            CartAction::ToggleCart => "toggle_cart",
            CartAction::OpenCart => "open_cart",
            CartAction::CloseCart => "close_cart",
            CartAction::LoadCart(_) => "load_cart",
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart: ordered line items plus the drawer visibility flag.
///
/// Item order is insertion order. The drawer flag starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartItem>,
    is_open: bool,
}

impl CartState {
    /// Creates an empty, closed cart.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Applies one action. This is the single dispatch point of the reducer.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(item) => self.add_item(item),
            CartAction::RemoveItem {
                product_id,
                variant_id,
            } => self.remove_item(&product_id, variant_id.as_deref()),
            CartAction::UpdateQuantity {
                product_id,
                variant_id,
                qty,
            } => self.update_quantity(&product_id, variant_id.as_deref(), qty),
            CartAction::ClearCart => self.clear(),
            CartAction::ToggleCart => self.toggle(),
            CartAction::OpenCart => self.open(),
            CartAction::CloseCart => self.close(),
            CartAction::LoadCart(items) => self.load(items),
        }
    }

    // -------------------------------------------------------------------------
    // Item mutations
    // -------------------------------------------------------------------------

    /// Adds an item, merging into the entry with the same key.
    ///
    /// ## Behavior
    /// - Key present: `qty` is added (saturating). If the sum ends up <= 0
    ///   the entry is dropped.
    /// - Key absent and `qty > 0`: appended.
    /// - Key absent and `qty <= 0`: nothing is stored.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(pos) = self.items.iter().position(|i| i.same_key(&item)) {
            let merged = self.items[pos].qty.saturating_add(item.qty);
            if merged <= 0 {
                self.items.remove(pos);
            } else {
                self.items[pos].qty = merged;
            }
            return;
        }

        if item.qty > 0 {
            self.items.push(item);
        }
    }

    /// Removes every entry whose product id matches.
    ///
    /// `_variant_id` is ignored; see [`CartAction::RemoveItem`].
    pub fn remove_item(&mut self, product_id: &str, _variant_id: Option<&str>) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Sets an entry's quantity (absolute, not a delta).
    ///
    /// `qty <= 0` removes the entry. Unknown keys are a no-op.
    pub fn update_quantity(&mut self, product_id: &str, variant_id: Option<&str>, qty: i64) {
        if qty <= 0 {
            self.items.retain(|i| !i.matches(product_id, variant_id));
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.matches(product_id, variant_id))
        {
            item.qty = qty;
        }
    }

    /// Empties the cart. The drawer flag is left alone.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replaces the item list with a restored snapshot.
    ///
    /// The snapshot is replayed through [`add_item`](Self::add_item), so a
    /// hand-edited or stale snapshot with duplicate keys or non-positive
    /// quantities still lands in a state that respects the invariants.
    pub fn load(&mut self, items: Vec<CartItem>) {
        self.items.clear();
        for item in items {
            self.add_item(item);
        }
    }

    // -------------------------------------------------------------------------
    // Drawer flag
    // -------------------------------------------------------------------------

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the entry for a composite key.
    pub fn find(&self, product_id: &str, variant_id: Option<&str>) -> Option<&CartItem> {
        self.items.iter().find(|i| i.matches(product_id, variant_id))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines (the header badge number).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |total, i| total.saturating_add(i.qty))
    }

    /// Sum of `unit price × qty` over the lines the catalog can price.
    ///
    /// Lines whose product is missing from `catalog` contribute zero. A
    /// variant id the product doesn't know falls back to the base price.
    pub fn subtotal<L>(&self, catalog: &L) -> Money
    where
        L: ProductLookup + ?Sized,
    {
        self.items
            .iter()
            .filter_map(|item| {
                catalog.product(&item.product_id).map(|product| {
                    product
                        .unit_price(item.variant_id.as_deref())
                        .amount
                        .multiply_quantity(item.qty)
                })
            })
            .sum()
    }

    /// Resolved lines for rendering. Unresolvable items are skipped.
    pub fn lines<L>(&self, catalog: &L) -> Vec<CartLine>
    where
        L: ProductLookup + ?Sized,
    {
        self.items
            .iter()
            .filter_map(|item| CartLine::resolve(item, catalog))
            .collect()
    }
}

// =============================================================================
// Cart Line (render model)
// =============================================================================

/// A cart item joined with catalog data, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub variant_id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub image: Option<String>,
    pub unit_price: Price,
    pub qty: i64,
    #[ts(type = "number")]
    pub line_total: Money,
}

impl CartLine {
    fn resolve<L>(item: &CartItem, catalog: &L) -> Option<Self>
    where
        L: ProductLookup + ?Sized,
    {
        let product = catalog.product(&item.product_id)?;
        let variant_id = item.variant_id.as_deref();
        let unit_price = product.unit_price(variant_id);

        Some(CartLine {
            product_id: item.product_id.clone(),
            variant_id: item.variant_id.clone(),
            title: product.line_title(variant_id),
            image: product.line_image(variant_id).map(str::to_string),
            unit_price,
            qty: item.qty,
            line_total: unit_price.amount.multiply_quantity(item.qty),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::product;
    use crate::types::Product;

    fn item(product_id: &str, variant_id: Option<&str>, qty: i64) -> CartItem {
        CartItem::new(product_id, variant_id.map(str::to_string), qty)
    }

    fn add(cart: &mut CartState, product_id: &str, variant_id: Option<&str>, qty: i64) {
        cart.apply(CartAction::AddItem(item(product_id, variant_id, qty)));
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert!(!cart.is_open());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_cart_key_distinguishes_variants() {
        let plain = item("A", None, 1);
        let variant = item("A", Some("v1"), 1);

        assert_ne!(plain.key(), variant.key());
        assert_eq!(variant.key(), item("A", Some("v1"), 7).key());
        assert!(variant.matches("A", Some("v1")));
        assert!(!variant.matches("A", None));
    }

    #[test]
    fn test_add_same_key_merges_quantity() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, 1);
        add(&mut cart, "A", None, 2);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.find("A", None).map(|i| i.qty), Some(3));
    }

    #[test]
    fn test_add_sums_per_key_across_interleaved_adds() {
        let mut cart = CartState::new();
        let adds = [
            ("A", None, 2),
            ("B", Some("v1"), 1),
            ("A", None, 5),
            ("B", Some("v2"), 4),
            ("B", Some("v1"), 3),
            ("A", Some("v1"), 1),
        ];
        for (p, v, q) in adds {
            add(&mut cart, p, v, q);
        }

        assert_eq!(cart.find("A", None).map(|i| i.qty), Some(7));
        assert_eq!(cart.find("A", Some("v1")).map(|i| i.qty), Some(1));
        assert_eq!(cart.find("B", Some("v1")).map(|i| i.qty), Some(4));
        assert_eq!(cart.find("B", Some("v2")).map(|i| i.qty), Some(4));
        assert_eq!(cart.line_count(), 4);
        assert_eq!(cart.item_count(), 16);
    }

    #[test]
    fn test_variant_is_part_of_the_key() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, 1);
        add(&mut cart, "A", Some("v1"), 1);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = CartState::new();
        add(&mut cart, "C", None, 1);
        add(&mut cart, "A", None, 1);
        add(&mut cart, "C", None, 1);
        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A"]);
    }

    #[test]
    fn test_add_never_stores_non_positive_quantity() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, 0);
        add(&mut cart, "B", None, -2);
        assert!(cart.is_empty());

        add(&mut cart, "C", None, 2);
        add(&mut cart, "C", None, -2);
        assert!(cart.find("C", None).is_none());
    }

    #[test]
    fn test_add_accepts_huge_quantities() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, i64::MAX);
        add(&mut cart, "A", None, 10);
        assert_eq!(cart.find("A", None).map(|i| i.qty), Some(i64::MAX));
    }

    #[test]
    fn test_remove_item_drops_every_variant_of_the_product() {
        let mut cart = CartState::new();
        add(&mut cart, "B", Some("v1"), 1);
        add(&mut cart, "B", Some("v2"), 1);
        add(&mut cart, "B", None, 1);
        add(&mut cart, "C", None, 1);

        cart.apply(CartAction::RemoveItem {
            product_id: "B".to_string(),
            variant_id: Some("v1".to_string()),
        });

        assert!(cart.items().iter().all(|i| i.product_id != "B"));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, 1);
        cart.remove_item("Z", None);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = CartState::new();
        add(&mut cart, "A", Some("v1"), 7);
        cart.apply(CartAction::UpdateQuantity {
            product_id: "A".to_string(),
            variant_id: Some("v1".to_string()),
            qty: 3,
        });
        assert_eq!(cart.find("A", Some("v1")).map(|i| i.qty), Some(3));
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, 2);
        add(&mut cart, "B", None, 2);

        cart.update_quantity("A", None, 0);
        cart.update_quantity("B", None, -5);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_only_touches_exact_key() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, 1);
        add(&mut cart, "A", Some("v1"), 1);

        cart.update_quantity("A", Some("v1"), 0);

        assert!(cart.find("A", None).is_some());
        assert!(cart.find("A", Some("v1")).is_none());
    }

    #[test]
    fn test_update_quantity_unknown_key_is_noop() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, 1);
        cart.update_quantity("A", Some("v9"), 4);
        cart.update_quantity("Z", None, 4);
        assert_eq!(cart.items(), &[item("A", None, 1)]);
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, 2);
        add(&mut cart, "B", None, 1);
        cart.open();

        cart.apply(CartAction::ClearCart);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_open());
    }

    #[test]
    fn test_drawer_state_machine() {
        let mut cart = CartState::new();
        cart.apply(CartAction::ToggleCart);
        assert!(cart.is_open());
        cart.apply(CartAction::ToggleCart);
        assert!(!cart.is_open());
        cart.apply(CartAction::OpenCart);
        cart.apply(CartAction::OpenCart);
        assert!(cart.is_open());
        cart.apply(CartAction::CloseCart);
        assert!(!cart.is_open());
    }

    #[test]
    fn test_load_normalises_snapshot() {
        let mut cart = CartState::new();
        add(&mut cart, "old", None, 1);

        cart.apply(CartAction::LoadCart(vec![
            item("A", None, 1),
            item("B", None, 0),
            item("A", None, 2),
            item("C", Some("v1"), -1),
        ]));

        assert_eq!(cart.items(), &[item("A", None, 3)]);
    }

    #[test]
    fn test_touches_items() {
        assert!(CartAction::AddItem(item("A", None, 1)).touches_items());
        assert!(CartAction::ClearCart.touches_items());
        assert!(!CartAction::ToggleCart.touches_items());
        assert!(!CartAction::LoadCart(Vec::new()).touches_items());
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("A", 10_000, &[("v1", 15_000)]),
            product("B", 2_550, &[]),
        ]
    }

    #[test]
    fn test_subtotal_empty_cart_is_zero() {
        assert_eq!(CartState::new().subtotal(&catalog()), Money::zero());
    }

    #[test]
    fn test_subtotal_base_price() {
        let mut cart = CartState::new();
        add(&mut cart, "A", None, 2);
        assert_eq!(cart.subtotal(&catalog()).cents(), 20_000);
    }

    #[test]
    fn test_subtotal_variant_price() {
        let mut cart = CartState::new();
        add(&mut cart, "A", Some("v1"), 2);
        assert_eq!(cart.subtotal(&catalog()).cents(), 30_000);
    }

    #[test]
    fn test_subtotal_skips_unknown_products_and_falls_back_on_unknown_variant() {
        let mut cart = CartState::new();
        add(&mut cart, "ghost", None, 5);
        add(&mut cart, "A", Some("gone"), 1);
        add(&mut cart, "B", None, 2);
        assert_eq!(cart.subtotal(&catalog()).cents(), 10_000 + 5_100);
    }

    #[test]
    fn test_lines_resolve_titles_and_totals() {
        let mut cart = CartState::new();
        add(&mut cart, "A", Some("v1"), 2);
        add(&mut cart, "ghost", None, 1);

        let lines = cart.lines(&catalog());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].title, "Product A - Variant v1");
        assert_eq!(lines[0].unit_price.amount.cents(), 15_000);
        assert_eq!(lines[0].line_total.cents(), 30_000);
    }

    #[test]
    fn test_cart_item_json_shape() {
        let json = serde_json::to_string(&item("A", None, 2)).unwrap();
        assert_eq!(json, r#"{"productId":"A","qty":2}"#);

        let with_variant: CartItem =
            serde_json::from_str(r#"{"productId":"B","variantId":"v1","qty":1}"#).unwrap();
        assert_eq!(with_variant, item("B", Some("v1"), 1));
    }
}
