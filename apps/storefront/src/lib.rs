//! # Playback Neon Storefront
//!
//! Terminal front end for the Playback Neon arcade store.
//!
//! ## Module Organization
//! ```text
//! neon_storefront/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (config + catalog + cart store)
//! │   └── config.rs   ◄─── StorefrontConfig
//! ├── commands/
//! │   ├── catalog.rs  ◄─── home, products
//! │   ├── cart.rs     ◄─── drawer and cart gestures
//! │   └── checkout.rs ◄─── checkout stubs
//! ├── render.rs       ◄─── pages as text
//! └── error.rs        ◄─── AppError for commands and startup
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use anyhow::Context;
use chrono::Datelike;
use neon_storage::CatalogLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use error::{AppError, AppResult};
use state::{AppState, StorefrontConfig};

/// Runs one storefront command.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • NEON_* environment, then --catalog / --data-dir flags             │
/// │                                                                         │
/// │  2. Fetch Catalog ────────────────────────────────────────────────────► │
/// │     • products.json via tokio::fs (fails the run if unreadable)         │
/// │                                                                         │
/// │  3. Open Cart Store ──────────────────────────────────────────────────► │
/// │     • FileSlot in the data dir, or MemorySlot with --ephemeral          │
/// │     • Persisted snapshot restored once (bad snapshot = empty cart)      │
/// │                                                                         │
/// │  4. Execute Command & Render ─────────────────────────────────────────► │
/// │     • header + page + footer to stdout                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = StorefrontConfig::from_env()
        .map_err(AppError::from)
        .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    let mut state = open_session(config, cli.ephemeral)
        .await
        .context("Failed to open storefront session")?;

    let page = execute(&mut state, cli.command)?;

    print!(
        "{}{}{}",
        render::header(&state.config, state.cart.item_count()),
        page,
        render::footer(&state.config, chrono::Utc::now().year())
    );
    Ok(())
}

/// Fetches the catalog and opens the cart store.
pub async fn open_session(config: StorefrontConfig, ephemeral: bool) -> AppResult<AppState> {
    let catalog = CatalogLoader::from_path(&config.catalog_path)
        .load()
        .await
        .map_err(AppError::catalog)?;

    let state = if ephemeral {
        info!("Ephemeral session, cart will not be saved");
        AppState::ephemeral(config, catalog)
    } else {
        AppState::with_file_slot(config, catalog)
    };
    Ok(state)
}

/// Dispatches a parsed command to its handler.
pub fn execute(state: &mut AppState, command: Command) -> AppResult<String> {
    use commands::{cart, catalog, checkout};

    let page = match command {
        Command::Home => catalog::home(state),
        Command::Products { category } => catalog::products(state, category.as_deref())?,
        Command::Cart => cart::view_cart(state),
        Command::Add {
            product,
            variant,
            qty,
        } => cart::add_to_cart(state, &product, variant.as_deref(), qty)?,
        Command::QuickAdd { product } => cart::quick_add(state, &product)?,
        Command::Set {
            product,
            qty,
            variant,
        } => cart::set_quantity(state, &product, variant.as_deref(), qty),
        Command::Inc { product, variant } => cart::increment(state, &product, variant.as_deref())?,
        Command::Dec { product, variant } => cart::decrement(state, &product, variant.as_deref())?,
        Command::Remove { product, variant } => {
            cart::remove_from_cart(state, &product, variant.as_deref())
        }
        Command::Clear => cart::clear_cart(state),
        Command::Checkout => checkout::checkout(state),
        Command::OrderConfirmation => checkout::order_confirmation(state),
    };
    Ok(page)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=neon_storage=trace` - Trace one crate
/// - Default: warnings, plus info from the neon crates
///
/// Logs go to stderr; stdout carries only the rendered page.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,neon=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared test catalog.

    use std::collections::BTreeMap;

    use chrono::DateTime;
    use neon_core::{Catalog, Category, Price, Product, Variant};

    use crate::state::{AppState, StorefrontConfig};

    fn variant(id: &str, title: &str, cents: i64) -> Variant {
        Variant {
            id: id.to_string(),
            title: title.to_string(),
            options: BTreeMap::new(),
            price: Price::usd(cents),
            stock: 3,
            image: None,
            sku: None,
        }
    }

    fn product(
        id: &str,
        slug: &str,
        title: &str,
        cents: i64,
        category: Category,
        variants: Vec<Variant>,
        featured: bool,
    ) -> Product {
        Product {
            id: id.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            price: Price::usd(cents),
            images: vec![format!("/img/{}.jpg", id)],
            tags: Vec::new(),
            category,
            variants,
            specs: BTreeMap::new(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            featured,
        }
    }

    pub fn catalog() -> Catalog {
        Catalog::from_products(vec![
            product(
                "cab-001",
                "pac-man-upright",
                "Pac-Man Upright",
                249_999,
                Category::Cabinet,
                vec![
                    variant("upright", "Upright", 249_999),
                    variant("cocktail", "Cocktail Table", 219_900),
                ],
                true,
            ),
            product(
                "pcb-001",
                "galaga-pcb",
                "Galaga PCB",
                34_900,
                Category::Pcb,
                Vec::new(),
                true,
            ),
            product(
                "ctl-001",
                "sanwa-button-kit",
                "Sanwa Button Kit",
                8_950,
                Category::Controller,
                vec![variant("red", "Red", 8_950), variant("black", "Black", 9_450)],
                false,
            ),
            product(
                "art-001",
                "donkey-kong-marquee",
                "Donkey Kong Marquee",
                4_500,
                Category::Artwork,
                Vec::new(),
                false,
            ),
        ])
    }

    /// A session with an in-memory cart.
    pub fn session() -> AppState {
        AppState::ephemeral(StorefrontConfig::default(), catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::fixtures::session;

    #[test]
    fn test_execute_routes_commands() {
        let mut state = session();

        let page = execute(
            &mut state,
            Command::Add {
                product: "cab-001".to_string(),
                variant: Some("cocktail".to_string()),
                qty: 1,
            },
        )
        .unwrap();
        assert!(page.contains("Added to cart!"));

        let page = execute(&mut state, Command::Cart).unwrap();
        assert!(page.contains("Pac-Man Upright - Cocktail Table"));

        let page = execute(&mut state, Command::Clear).unwrap();
        assert!(page.contains("Empty Cart"));
    }

    #[test]
    fn test_execute_surfaces_lookup_errors() {
        let mut state = session();
        let err = execute(&mut state, Command::QuickAdd { product: "nope".to_string() })
            .unwrap_err();
        assert_eq!(err.to_string(), "[NotFound] Product not found: nope");
    }

    #[tokio::test]
    async fn test_open_session_with_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.catalog_path = dir.path().join("missing.json");

        let err = match open_session(config, true).await {
            Ok(_) => panic!("session opened without a catalog"),
            Err(err) => err,
        };
        assert_eq!(err.code, ErrorCode::CatalogError);
        assert!(err.message.contains("missing.json"));
    }

    #[tokio::test]
    async fn test_open_session_with_malformed_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, r#"{"not": "a list"}"#).unwrap();

        let mut config = StorefrontConfig::default();
        config.catalog_path = path;

        let err = match open_session(config, true).await {
            Ok(_) => panic!("session opened with a malformed catalog"),
            Err(err) => err,
        };
        assert_eq!(err.code, ErrorCode::CatalogError);
    }

    #[tokio::test]
    async fn test_open_session_restores_saved_cart() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("playback-neon-cart.json"),
            r#"[{"productId":"cab-001","variantId":"cocktail","qty":2}]"#,
        )
        .unwrap();

        let mut config = StorefrontConfig::default();
        config.data_dir = dir.path().to_path_buf();

        let state = match open_session(config, false).await {
            Ok(state) => state,
            Err(err) => panic!("demo catalog failed to load: {}", err),
        };
        assert_eq!(state.cart.item_count(), 2);
    }

    #[test]
    fn test_bad_env_value_is_a_config_error() {
        let err = StorefrontConfig::from_lookup(|key| {
            (key == "NEON_CURRENCY").then(|| "GBP".to_string())
        })
        .map_err(AppError::from)
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.to_string(), "[ConfigError] Invalid value for NEON_CURRENCY");
    }

    #[test]
    fn test_demo_catalog_parses() {
        let contents = std::fs::read_to_string(state::DEFAULT_CATALOG_PATH).unwrap();
        let catalog = CatalogLoader::from_path(state::DEFAULT_CATALOG_PATH)
            .parse(&contents)
            .unwrap();

        assert!(!catalog.is_empty());
        assert_eq!(catalog.featured(3).len(), 3);
        assert!(catalog.category_counts().values().all(|&n| n > 0));
        assert!(neon_core::validation::validate_catalog(&catalog).is_empty());
    }
}
