//! # Catalog Commands
//!
//! Read-only pages: the landing page and the product listing.

use neon_core::Category;
use tracing::debug;

use crate::error::AppResult;
use crate::render;
use crate::state::AppState;

/// Landing page: hero, featured products, category tiles.
pub fn home(state: &AppState) -> String {
    debug!(products = state.catalog.len(), "home command");
    render::landing(&state.config, &state.catalog)
}

/// Product listing, optionally filtered by a category id (`cabinet`, `pcb`, ...).
pub fn products(state: &AppState, category: Option<&str>) -> AppResult<String> {
    let category = category.map(str::parse::<Category>).transpose()?;
    debug!(?category, "products command");
    Ok(render::products_page(&state.config, &state.catalog, category))
}
