//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! `Currency` and `Price` types the catalog speaks in.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The catalog JSON carries prices as decimal numbers:                    │
//! │    { "amount": 2499.99, "currency": "USD" }                             │
//! │                                                                         │
//! │  Summing those as floats drifts:                                        │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: convert ONCE at the catalog boundary to integer cents,   │
//! │  then every subtotal / tax / shipping calculation is exact.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use neon_core::money::{Currency, Money};
//!
//! let price = Money::from_cents(249_999); // 2499.99
//! let two = price * 2;
//! assert_eq!(two.cents(), 499_998);
//! assert_eq!(two.format(Currency::Usd), "$4999.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction (free-shipping remainder) can go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency inside**: the storefront runs in a single currency
///   context, so the currency travels alongside in [`Price`] / config
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use neon_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount (as found in the catalog JSON) into cents.
    ///
    /// Rounds half away from zero to the nearest cent. Only the catalog
    /// boundary should call this; all arithmetic afterwards stays in cents.
    ///
    /// ## Example
    /// ```rust
    /// use neon_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_amount(2499.99).cents(), 249_999);
    /// assert_eq!(Money::from_decimal_amount(0.005).cents(), 1);
    /// ```
    pub fn from_decimal_amount(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Converts back to a decimal amount for the JSON boundary.
    pub fn to_decimal_amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 rounds the
    /// half cent up, so 8% of 0.50 (4.0 cents) is 4 cents and 8% of 0.06
    /// (0.48 cents) is 0 cents.
    ///
    /// ## Example
    /// ```rust
    /// use neon_core::money::Money;
    /// use neon_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(20_000); // 200.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800)); // 8%
    /// assert_eq!(tax.cents(), 1_600);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps huge carts from overflowing mid-calculation
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// Saturates instead of overflowing: the cart accepts arbitrarily large
    /// quantities, and a pinned total is better than a wrapped negative one.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Renders the amount with a currency symbol, e.g. `$12.34` or `-€5.50`.
    pub fn format(&self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            currency.symbol(),
            self.major().abs(),
            self.minor()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering without a currency symbol (`12.34`).
///
/// Use [`Money::format`] or [`Price`]'s `Display` when the symbol matters.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a cart quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Currencies the storefront can price in.
///
/// Closed set. There is no conversion logic: every calculation assumes the
/// single currency the store is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Display symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(ValidationError::NotAllowed {
                field: "currency".to_string(),
                allowed: vec!["USD".to_string(), "EUR".to_string()],
            }),
        }
    }
}

// =============================================================================
// Price
// =============================================================================

/// A catalog price: amount plus currency code.
///
/// ## JSON Shape
/// ```json
/// { "amount": 2499.99, "currency": "USD" }
/// ```
/// The decimal amount is converted to cents on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Price {
    #[serde(with = "decimal_amount")]
    #[ts(type = "number")]
    pub amount: Money,
    pub currency: Currency,
}

impl Price {
    /// Creates a price from cents.
    pub const fn new(cents: i64, currency: Currency) -> Self {
        Price {
            amount: Money::from_cents(cents),
            currency,
        }
    }

    /// Shorthand for a USD price.
    pub const fn usd(cents: i64) -> Self {
        Price::new(cents, Currency::Usd)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.amount.format(self.currency))
    }
}

/// Serde adapter: decimal JSON number <-> integer cents.
mod decimal_amount {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal_amount())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(D::Error::custom("price amount must be a finite number"));
        }
        Ok(Money::from_decimal_amount(amount))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
