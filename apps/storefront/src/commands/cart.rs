//! # Cart Commands
//!
//! The drawer and every cart gesture.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add / quick-add  ┌──────────┐   set / inc / dec         │
//! │  │  Empty   │─────────────────►│ In Cart  │◄──────────────┐           │
//! │  │  Cart    │                   │          │───────────────┘           │
//! │  └──────────┘                   └──────────┘                            │
//! │       ▲                              │                                  │
//! │       │      remove (last line)      │                                  │
//! │       └───────── clear ──────────────┘                                  │
//! │                                                                         │
//! │  Every gesture ends with the drawer open and rendered.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Gestures that name a product in the cart (`set`, `inc`, `dec`, `remove`)
//! accept ids that are no longer in the catalog, so stale lines can still be
//! edited. Gestures that put something new in the cart (`add`, `quick-add`)
//! only accept catalog products.

use neon_core::CartItem;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::render;
use crate::state::AppState;

/// Opens the drawer and renders it.
pub fn view_cart(state: &mut AppState) -> String {
    state.cart.open_cart();
    render::drawer(&state.config, state.cart.state(), &state.catalog)
}

/// Adds `qty` of a product (and optionally one of its variants).
pub fn add_to_cart(
    state: &mut AppState,
    product: &str,
    variant_id: Option<&str>,
    qty: i64,
) -> AppResult<String> {
    let (product_id, title) = {
        let (product, _) = state.product_variant(product, variant_id)?;
        (product.id.clone(), product.line_title(variant_id))
    };
    debug!(%product_id, ?variant_id, qty, "add_to_cart command");

    state
        .cart
        .add_item(CartItem::new(product_id, variant_id.map(str::to_string), qty));

    let mut out = render::added_toast(&title);
    out.push_str(&view_cart(state));
    Ok(out)
}

/// One-click add from a listing: first variant, quantity 1.
pub fn quick_add(state: &mut AppState, product: &str) -> AppResult<String> {
    let (item, title) = {
        let product = state.product(product)?;
        (product.quick_add_item(), product.title.clone())
    };
    debug!(product_id = %item.product_id, variant_id = ?item.variant_id, "quick_add command");

    state.cart.add_item(item);

    let mut out = render::added_toast(&title);
    out.push_str(&view_cart(state));
    Ok(out)
}

/// Sets the quantity of one line. Zero or less removes it.
pub fn set_quantity(
    state: &mut AppState,
    product: &str,
    variant_id: Option<&str>,
    qty: i64,
) -> String {
    let product_id = cart_product_id(state, product);
    debug!(%product_id, ?variant_id, qty, "set_quantity command");

    state.cart.update_quantity(&product_id, variant_id, qty);
    view_cart(state)
}

/// The drawer's "+" button.
pub fn increment(state: &mut AppState, product: &str, variant_id: Option<&str>) -> AppResult<String> {
    step_quantity(state, product, variant_id, 1)
}

/// The drawer's "-" button. Stepping below 1 removes the line.
pub fn decrement(state: &mut AppState, product: &str, variant_id: Option<&str>) -> AppResult<String> {
    step_quantity(state, product, variant_id, -1)
}

fn step_quantity(
    state: &mut AppState,
    product: &str,
    variant_id: Option<&str>,
    delta: i64,
) -> AppResult<String> {
    let product_id = cart_product_id(state, product);
    let current = state
        .cart
        .state()
        .find(&product_id, variant_id)
        .map(|item| item.qty)
        .ok_or_else(|| AppError::not_found("Cart line", &line_label(&product_id, variant_id)))?;

    Ok(set_quantity(
        state,
        &product_id,
        variant_id,
        current.saturating_add(delta),
    ))
}

/// Removes a product from the cart.
///
/// Every line of the product goes, whatever `variant_id` says.
pub fn remove_from_cart(state: &mut AppState, product: &str, variant_id: Option<&str>) -> String {
    let product_id = cart_product_id(state, product);
    debug!(%product_id, ?variant_id, "remove_from_cart command");

    state.cart.remove_item(&product_id, variant_id);
    view_cart(state)
}

pub fn clear_cart(state: &mut AppState) -> String {
    debug!("clear_cart command");
    state.cart.clear_cart();
    view_cart(state)
}

/// Maps a slug to its product id; anything unknown is taken as an id.
fn cart_product_id(state: &AppState, product: &str) -> String {
    state
        .catalog
        .resolve(product)
        .map(|p| p.id.clone())
        .unwrap_or_else(|| product.to_string())
}

fn line_label(product_id: &str, variant_id: Option<&str>) -> String {
    match variant_id {
        Some(variant_id) => format!("{}/{}", product_id, variant_id),
        None => product_id.to_string(),
    }
}
