//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--catalog`, `--data-dir`)
//! 2. Environment variables (`NEON_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::path::PathBuf;

use directories::ProjectDirs;
use neon_core::totals::PricingRules;
use neon_core::{Currency, Money, TaxRate, CART_SLOT_KEY, FEATURED_LIMIT};

/// Catalog shipped with the storefront.
pub const DEFAULT_CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/products.json");

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Brand shown in the header and footer
    pub brand: String,

    /// Header subtitle
    pub tagline: String,

    /// Footer blurb
    pub description: String,

    /// Tax, shipping and currency
    pub pricing: PricingRules,

    /// Name of the persisted cart slot
    pub slot_key: String,

    /// Where the cart slot file lives
    pub data_dir: PathBuf,

    /// Product list to load
    pub catalog_path: PathBuf,

    /// Number of featured products on the landing page
    pub featured_limit: usize,
}

impl Default for StorefrontConfig {
    /// ## Default Values
    /// - Brand: "Playback Neon"
    /// - Currency: USD
    /// - Tax: 8%, free shipping from $200.00, otherwise $50.00
    /// - Data dir: platform data directory
    fn default() -> Self {
        StorefrontConfig {
            brand: "Playback Neon".to_string(),
            tagline: "INSERT COIN TO CONTINUE".to_string(),
            description: "Premium restored arcade cabinets, PCB boards, and retro gaming \
                          accessories. Step into the neon-soaked world of classic arcade gaming."
                .to_string(),
            pricing: PricingRules::default(),
            slot_key: CART_SLOT_KEY.to_string(),
            data_dir: default_data_dir(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            featured_limit: FEATURED_LIMIT,
        }
    }
}

/// Platform data directory for the cart slot.
///
/// - **macOS**: `~/Library/Application Support/com.playback.neon`
/// - **Windows**: `%APPDATA%\playback\neon\data`
/// - **Linux**: `~/.local/share/neon`
///
/// Falls back to `./.neon` when no home directory can be determined.
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "playback", "neon")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".neon"))
}

impl StorefrontConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `NEON_DATA_DIR`: directory holding the cart slot
    /// - `NEON_CATALOG`: path to the product JSON
    /// - `NEON_TAX_RATE`: tax rate in percent (e.g. "8.25")
    /// - `NEON_FREE_SHIPPING`: free-shipping threshold in cents
    /// - `NEON_FLAT_SHIPPING`: flat shipping fee in cents
    /// - `NEON_CURRENCY`: `USD` or `EUR`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StorefrontConfig::default();

        if let Some(dir) = lookup("NEON_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(path) = lookup("NEON_CATALOG") {
            config.catalog_path = PathBuf::from(path);
        }

        if let Some(rate) = lookup("NEON_TAX_RATE") {
            let pct: f64 = rate
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("NEON_TAX_RATE".to_string()))?;
            if !(0.0..=100.0).contains(&pct) {
                return Err(ConfigError::InvalidValue("NEON_TAX_RATE".to_string()));
            }
            config.pricing.tax_rate = TaxRate::from_percentage(pct);
        }

        if let Some(cents) = lookup("NEON_FREE_SHIPPING") {
            config.pricing.free_shipping_threshold = parse_cents("NEON_FREE_SHIPPING", &cents)?;
        }

        if let Some(cents) = lookup("NEON_FLAT_SHIPPING") {
            config.pricing.flat_shipping = parse_cents("NEON_FLAT_SHIPPING", &cents)?;
        }

        if let Some(code) = lookup("NEON_CURRENCY") {
            config.pricing.currency = code
                .parse::<Currency>()
                .map_err(|_| ConfigError::InvalidValue("NEON_CURRENCY".to_string()))?;
        }

        Ok(config)
    }

    /// Formats a money amount in the store currency.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_money(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        amount.format(self.pricing.currency)
    }
}

fn parse_cents(var: &str, value: &str) -> Result<Money, ConfigError> {
    let cents: i64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(var.to_string()))?;
    if cents < 0 {
        return Err(ConfigError::InvalidValue(var.to_string()));
    }
    Ok(Money::from_cents(cents))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.brand, "Playback Neon");
        assert_eq!(config.slot_key, "playback-neon-cart");
        assert_eq!(config.pricing.tax_rate.bps(), 800);
        assert_eq!(config.pricing.free_shipping_threshold.cents(), 20_000);
        assert_eq!(config.pricing.flat_shipping.cents(), 5_000);
        assert_eq!(config.featured_limit, 3);
    }

    #[test]
    fn test_env_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("NEON_DATA_DIR", "/tmp/neon"),
            ("NEON_TAX_RATE", "8.25"),
            ("NEON_FREE_SHIPPING", "15000"),
            ("NEON_FLAT_SHIPPING", "999"),
            ("NEON_CURRENCY", "eur"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/neon"));
        assert_eq!(config.pricing.tax_rate.bps(), 825);
        assert_eq!(config.pricing.free_shipping_threshold.cents(), 15_000);
        assert_eq!(config.pricing.flat_shipping.cents(), 999);
        assert_eq!(config.pricing.currency, Currency::Eur);
    }

    #[test]
    fn test_invalid_env_values() {
        for (key, value) in [
            ("NEON_TAX_RATE", "lots"),
            ("NEON_TAX_RATE", "150"),
            ("NEON_FREE_SHIPPING", "-1"),
            ("NEON_CURRENCY", "GBP"),
        ] {
            let err = StorefrontConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid value for {}", key));
        }
    }

    #[test]
    fn test_format_money() {
        let mut config = StorefrontConfig::default();
        assert_eq!(config.format_money(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_money(Money::from_cents(-1234)), "-$12.34");

        config.pricing.currency = Currency::Eur;
        assert_eq!(config.format_money(Money::from_cents(100)), "€1.00");
    }
}
