//! # Command Line
//!
//! `neon` subcommands, one per storefront page or cart gesture.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use neon_core::validation::parse_quantity;

use crate::state::StorefrontConfig;

#[derive(Debug, Parser)]
#[command(name = "neon")]
#[command(about = "Playback Neon - arcade cabinets, PCBs and parts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Product catalog JSON (overrides NEON_CATALOG)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory holding the saved cart (overrides NEON_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep the cart in memory; nothing is read or saved
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Landing page with featured products and categories
    Home,

    /// List products
    Products {
        /// Only this category (cabinet, pcb, controller, artwork)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Open the cart drawer
    Cart,

    /// Add a product to the cart
    Add {
        /// Product id or slug
        product: String,
        /// Variant id
        #[arg(short, long)]
        variant: Option<String>,
        /// Quantity to add
        #[arg(short, long, default_value = "1", value_parser = quantity, allow_negative_numbers = true)]
        qty: i64,
    },

    /// One-click add: first variant, quantity 1
    QuickAdd {
        /// Product id or slug
        product: String,
    },

    /// Set the quantity of a cart line (0 removes it)
    Set {
        /// Product id or slug
        product: String,
        /// New quantity
        #[arg(value_parser = quantity, allow_negative_numbers = true)]
        qty: i64,
        /// Variant id
        #[arg(short, long)]
        variant: Option<String>,
    },

    /// Increase a cart line by one
    Inc {
        /// Product id or slug
        product: String,
        /// Variant id
        #[arg(short, long)]
        variant: Option<String>,
    },

    /// Decrease a cart line by one
    Dec {
        /// Product id or slug
        product: String,
        /// Variant id
        #[arg(short, long)]
        variant: Option<String>,
    },

    /// Remove a product (all of its variants) from the cart
    Remove {
        /// Product id or slug
        product: String,
        /// Variant id
        #[arg(short, long)]
        variant: Option<String>,
    },

    /// Empty the cart
    Clear,

    /// Proceed to checkout
    Checkout,

    /// Order confirmation page
    OrderConfirmation,
}

fn quantity(input: &str) -> Result<i64, String> {
    parse_quantity(input).map_err(|e| e.to_string())
}

impl Cli {
    /// Applies command line flags over env/default configuration.
    pub fn apply_overrides(&self, config: &mut StorefrontConfig) {
        if let Some(path) = &self.catalog {
            config.catalog_path = path.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
    }
}
