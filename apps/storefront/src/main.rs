//! # Playback Neon Storefront Entry Point
//!
//! ```text
//! $ neon home
//! $ neon add pac-man-upright --variant cocktail
//! $ neon cart
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

use clap::Parser;
use neon_storefront::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    neon_storefront::init_tracing();

    let cli = Cli::parse();
    neon_storefront::run(cli).await
}
