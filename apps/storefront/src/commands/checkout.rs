//! # Checkout Commands
//!
//! Placeholder pages. No order is created and the cart is left as is.

use neon_core::OrderSummary;
use tracing::debug;

use crate::render;
use crate::state::AppState;

/// "Proceed to Checkout": closes the drawer and shows what would be charged.
pub fn checkout(state: &mut AppState) -> String {
    debug!("checkout command");
    state.cart.close_cart();

    let mut out = render::placeholder("Checkout", "Checkout is coming soon!");
    if !state.cart.state().is_empty() {
        let summary =
            OrderSummary::for_cart(state.cart.state(), &state.catalog, &state.config.pricing);
        out.push('\n');
        out.push_str(&render::summary_block(&state.config, &summary));
    }
    out
}

pub fn order_confirmation(_state: &AppState) -> String {
    debug!("order_confirmation command");
    render::placeholder("Order Confirmation", "Order confirmation page coming soon!")
}
