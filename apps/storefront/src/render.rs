//! # Page Rendering
//!
//! Turns store and catalog state into terminal text. Every function here is
//! pure: state in, `String` out. Nothing in this module touches the cart.
//!
//! ## Page Layout
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  PLAYBACK NEON                                        CART (3)   │  header()
//! │  INSERT COIN TO CONTINUE                                         │
//! │  Home · Cabinets · PCBs · Controllers · Artwork                  │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  landing() / product_list() / drawer() / placeholder()          │  body
//! ├──────────────────────────────────────────────────────────────────┤
//! │  PLAYBACK NEON · INSERT COIN TO CONTINUE                         │  footer()
//! │  Premium restored arcade cabinets, ...                           │
//! │  Arcade Cabinets                          neon products cabinet  │
//! │  © 2026 Playback Neon. All rights reserved.                      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use neon_core::{CartState, Catalog, Category, OrderSummary, Product};

use crate::state::StorefrontConfig;

/// Printable width of a page.
pub const PAGE_WIDTH: usize = 64;

/// Short names for the header navigation row.
fn nav_label(category: Category) -> &'static str {
    match category {
        Category::Cabinet => "Cabinets",
        Category::Pcb => "PCBs",
        Category::Controller => "Controllers",
        Category::Artwork => "Artwork",
    }
}

// =============================================================================
// Layout helpers
// =============================================================================

fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(PAGE_WIDTH).collect()
}

/// A label on the left, a value flush right.
fn row(label: &str, value: &str) -> String {
    let used = label.chars().count() + value.chars().count() + 2;
    let pad = PAGE_WIDTH.saturating_sub(used).max(1);
    format!("  {}{}{}\n", label, " ".repeat(pad), value)
}

fn heading(title: &str) -> String {
    format!("\n  {}\n  {}\n", title.to_uppercase(), "─".repeat(title.chars().count()))
}

fn pluralize(count: i64, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

// =============================================================================
// Chrome
// =============================================================================

/// Header with brand, tagline, navigation and the cart badge.
///
/// The badge only shows a number when the cart holds something.
pub fn header(config: &StorefrontConfig, item_count: i64) -> String {
    let badge = if item_count > 0 {
        format!("CART ({})", item_count)
    } else {
        "CART".to_string()
    };

    let nav: Vec<&str> = std::iter::once("Home")
        .chain(Category::ALL.iter().map(|c| nav_label(*c)))
        .collect();

    let mut out = rule('═');
    out.push('\n');
    out.push_str(&row(&config.brand.to_uppercase(), &badge));
    out.push_str(&format!("  {}\n", config.tagline));
    out.push_str(&format!("  {}\n", nav.join(" · ")));
    out.push_str(&rule('═'));
    out.push('\n');
    out
}

/// Footer with the store blurb, category shortcuts and copyright.
pub fn footer(config: &StorefrontConfig, year: i32) -> String {
    let mut out = String::from("\n");
    out.push_str(&rule('─'));
    out.push('\n');
    out.push_str(&format!(
        "  {} · {}\n",
        config.brand.to_uppercase(),
        config.tagline
    ));
    out.push_str(&format!("  {}\n\n", config.description));
    for category in Category::ALL {
        out.push_str(&row(
            category.display_name(),
            &format!("neon products {}", category.id()),
        ));
    }
    out.push('\n');
    out.push_str(&format!("  © {} {}. All rights reserved.\n", year, config.brand));
    out
}

// =============================================================================
// Catalog pages
// =============================================================================

/// One product in a listing.
///
/// ```text
///   Pac-Man Upright                                        $2499.99
///     pac-man-upright · Arcade Cabinets · 2 variants
/// ```
pub fn product_card(config: &StorefrontConfig, product: &Product) -> String {
    let mut out = row(&product.title, &config.format_money(product.price.amount));

    let mut details = vec![product.slug.clone(), product.category.display_name().to_string()];
    if !product.variants.is_empty() {
        details.push(pluralize(product.variants.len() as i64, "variant", "variants"));
    }
    if product.featured {
        details.push("Featured".to_string());
    }
    out.push_str(&format!("    {}\n", details.join(" · ")));
    out
}

/// A titled list of products.
pub fn product_list(config: &StorefrontConfig, title: &str, products: &[&Product]) -> String {
    let mut out = heading(title);
    if products.is_empty() {
        out.push_str("  No products found.\n");
        return out;
    }
    for product in products {
        out.push_str(&product_card(config, product));
    }
    out
}

/// Category tiles with product counts.
pub fn category_tiles(catalog: &Catalog) -> String {
    let mut out = heading("Browse Categories");
    for (category, count) in catalog.category_counts() {
        out.push_str(&row(
            category.display_name(),
            &pluralize(count as i64, "product", "products"),
        ));
        out.push_str(&format!("    {}\n", category.blurb()));
    }
    out
}

/// Landing page: hero, featured products and category tiles.
pub fn landing(config: &StorefrontConfig, catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n  {}\n", config.brand.to_uppercase()));
    out.push_str(&format!("  {}\n\n", config.description));
    out.push_str("  > neon products             Explore Arcade Treasures\n");

    let featured = catalog.featured(config.featured_limit);
    out.push_str(&product_list(config, "Featured Arcade Machines", &featured));
    out.push_str("  > neon quick-add <product>  one click, first variant\n");

    out.push_str(&category_tiles(catalog));
    out
}

/// Full listing, optionally narrowed to one category.
pub fn products_page(
    config: &StorefrontConfig,
    catalog: &Catalog,
    category: Option<Category>,
) -> String {
    match category {
        Some(category) => {
            let products = catalog.in_category(category);
            product_list(config, category.display_name(), &products)
        }
        None => {
            let products: Vec<&Product> = catalog.iter().collect();
            product_list(config, "Products Catalog", &products)
        }
    }
}

/// Confirmation shown after a one-click add.
pub fn added_toast(product_title: &str) -> String {
    format!(
        "\n  Added to cart!\n  {} has been added to your cart.\n",
        product_title
    )
}

/// A page that has no content yet.
pub fn placeholder(title: &str, message: &str) -> String {
    format!("{}  {}\n", heading(title), message)
}

// =============================================================================
// Cart drawer
// =============================================================================

/// The cart drawer.
///
/// ## Layout
/// ```text
///   YOUR CART · 1 ITEM
///   ──────────────────────────────────────────────────────────────
///   Pac-Man Upright - Cocktail Table
///     $2199.00 × 1                                       $2199.00
///   ──────────────────────────────────────────────────────────────
///   Subtotal                                             $2199.00
///   Tax (8%)                                              $175.92
///   Shipping (Free!)                                         FREE
///   ──────────────────────────────────────────────────────────────
///   Total                                                $2374.92
/// ```
pub fn drawer(config: &StorefrontConfig, state: &CartState, catalog: &Catalog) -> String {
    let mut out = String::new();

    if state.is_empty() {
        out.push_str(&heading("Your Cart"));
        out.push_str("  Empty Cart\n");
        out.push_str("  Your cart is empty. Start browsing our arcade treasures!\n\n");
        out.push_str("  [ Continue Shopping ]\n");
        return out;
    }

    let summary = OrderSummary::for_cart(state, catalog, &config.pricing);
    out.push_str(&heading(&format!(
        "Your Cart · {}",
        pluralize(summary.item_count, "item", "items")
    )));

    for line in state.lines(catalog) {
        out.push_str(&format!("  {}\n", line.title));
        out.push_str(&row(
            &format!(
                "  {} × {}",
                config.format_money(line.unit_price.amount),
                line.qty
            ),
            &config.format_money(line.line_total),
        ));
    }

    out.push_str(&format!("  {}\n", "─".repeat(PAGE_WIDTH - 2)));
    out.push_str(&summary_block(config, &summary));
    out.push_str("\n  [ Proceed to Checkout ]    [ View Full Cart ]\n");
    out
}

/// The "Order Summary" rows under the cart lines.
pub fn summary_block(config: &StorefrontConfig, summary: &OrderSummary) -> String {
    let mut out = row("Subtotal", &config.format_money(summary.subtotal));
    out.push_str(&row(
        &format!("Tax ({}%)", config.pricing.tax_rate.percentage()),
        &config.format_money(summary.tax),
    ));

    if summary.ships_free() {
        out.push_str(&row("Shipping (Free!)", "FREE"));
    } else {
        out.push_str(&row("Shipping", &config.format_money(summary.shipping)));
    }

    if let Some(remaining) = summary.free_shipping_remaining {
        out.push_str(&format!(
            "  Add {} more for free shipping!\n",
            config.format_money(remaining)
        ));
    }

    out.push_str(&format!("  {}\n", "─".repeat(PAGE_WIDTH - 2)));
    out.push_str(&row("Total", &config.format_money(summary.total)));
    out
}
