//! # Order Totals
//!
//! Derived display values for the cart drawer and checkout: tax, shipping
//! and grand total. Computed at render time, never persisted.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal  = Σ unit_price × qty            (CartState::subtotal)        │
//! │  tax       = round(subtotal × tax_rate)                                 │
//! │  shipping  = 0            if subtotal >= free_shipping_threshold        │
//! │              0            if the cart is empty                          │
//! │              flat_fee     otherwise                                     │
//! │  total     = subtotal + tax + shipping                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartState;
use crate::catalog::ProductLookup;
use crate::money::{Currency, Money};
use crate::types::TaxRate;

/// Default tax as a fraction of the subtotal: 8%.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Default free-shipping threshold: 200.00.
pub const DEFAULT_FREE_SHIPPING_CENTS: i64 = 20_000;

/// Default flat shipping fee: 50.00.
pub const DEFAULT_FLAT_SHIPPING_CENTS: i64 = 5_000;

/// Store-wide pricing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingRules {
    pub tax_rate: TaxRate,
    pub free_shipping_threshold: Money,
    pub flat_shipping: Money,
    pub currency: Currency,
}

impl Default for PricingRules {
    fn default() -> Self {
        PricingRules {
            tax_rate: TaxRate::from_fraction(DEFAULT_TAX_RATE),
            free_shipping_threshold: Money::from_cents(DEFAULT_FREE_SHIPPING_CENTS),
            flat_shipping: Money::from_cents(DEFAULT_FLAT_SHIPPING_CENTS),
            currency: Currency::Usd,
        }
    }
}

impl PricingRules {
    /// Shipping charged for a given subtotal.
    pub fn shipping_for(&self, subtotal: Money, item_count: i64) -> Money {
        if item_count <= 0 || subtotal >= self.free_shipping_threshold {
            Money::zero()
        } else {
            self.flat_shipping
        }
    }
}

/// Everything the drawer's "Order Summary" block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub item_count: i64,
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,

    /// How much more to spend for free shipping; `None` once it's free.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub free_shipping_remaining: Option<Money>,

    pub currency: Currency,
}

impl OrderSummary {
    /// Computes the summary from a subtotal and item count.
    pub fn compute(subtotal: Money, item_count: i64, rules: &PricingRules) -> Self {
        let tax = subtotal.calculate_tax(rules.tax_rate);
        let shipping = rules.shipping_for(subtotal, item_count);
        let remaining = rules.free_shipping_threshold - subtotal;

        OrderSummary {
            item_count,
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
            free_shipping_remaining: remaining.is_positive().then_some(remaining),
            currency: rules.currency,
        }
    }

    /// Computes the summary for a cart priced against `catalog`.
    pub fn for_cart<L>(cart: &CartState, catalog: &L, rules: &PricingRules) -> Self
    where
        L: ProductLookup + ?Sized,
    {
        OrderSummary::compute(cart.subtotal(catalog), cart.item_count(), rules)
    }

    /// Whether shipping was waived by the threshold.
    pub fn ships_free(&self) -> bool {
        self.item_count > 0 && self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::types::tests::product;

    #[test]
    fn test_default_rules() {
        let rules = PricingRules::default();
        assert_eq!(rules.tax_rate.bps(), 800);
        assert_eq!(rules.free_shipping_threshold.cents(), 20_000);
        assert_eq!(rules.flat_shipping.cents(), 5_000);
        assert_eq!(rules.currency, Currency::Usd);
    }

    #[test]
    fn test_below_threshold_pays_flat_fee() {
        let summary = OrderSummary::compute(Money::from_cents(10_000), 1, &PricingRules::default());
        assert_eq!(summary.tax.cents(), 800);
        assert_eq!(summary.shipping.cents(), 5_000);
        assert_eq!(summary.total.cents(), 15_800);
        assert_eq!(summary.free_shipping_remaining, Some(Money::from_cents(10_000)));
        assert!(!summary.ships_free());
    }

    #[test]
    fn test_at_threshold_ships_free() {
        let summary = OrderSummary::compute(Money::from_cents(20_000), 2, &PricingRules::default());
        assert_eq!(summary.shipping, Money::zero());
        assert_eq!(summary.total.cents(), 21_600);
        assert_eq!(summary.free_shipping_remaining, None);
        assert!(summary.ships_free());
    }

    #[test]
    fn test_empty_cart_has_zero_total() {
        let summary = OrderSummary::compute(Money::zero(), 0, &PricingRules::default());
        assert_eq!(summary.total, Money::zero());
        assert!(!summary.ships_free());
    }

    #[test]
    fn test_for_cart_uses_catalog_prices() {
        let catalog = vec![product("A", 12_500, &[("deluxe", 30_000)])];
        let mut cart = CartState::new();
        cart.add_item(CartItem::new("A", Some("deluxe".to_string()), 1));

        let summary = OrderSummary::for_cart(&cart, &catalog, &PricingRules::default());
        assert_eq!(summary.subtotal.cents(), 30_000);
        assert_eq!(summary.tax.cents(), 2_400);
        assert_eq!(summary.shipping, Money::zero());
        assert_eq!(summary.total.cents(), 32_400);
    }

    #[test]
    fn test_custom_rules() {
        let rules = PricingRules {
            tax_rate: TaxRate::zero(),
            free_shipping_threshold: Money::from_cents(1_000),
            flat_shipping: Money::from_cents(499),
            currency: Currency::Eur,
        };
        let summary = OrderSummary::compute(Money::from_cents(999), 1, &rules);
        assert_eq!(summary.total.cents(), 1_498);
        assert_eq!(summary.currency, Currency::Eur);
    }
}
