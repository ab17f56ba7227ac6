//! # Storefront Commands
//!
//! One function per user gesture. Each takes the session state and returns
//! the text to print.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── home, products
//! ├── cart.rs      ◄─── cart drawer and every cart mutation
//! └── checkout.rs  ◄─── checkout / order confirmation stubs
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ neon set pac-man-upright --variant cocktail 2                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cli.rs: Command::Set { product, variant, qty }                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::set_quantity(&mut state, ...)                          │
//! │         │  resolve product id  (slug -> id)                             │
//! │         │  state.cart.update_quantity(...)   ◄── dispatch + persist     │
//! │         │  state.cart.open_cart()                                       │
//! │         ▼                                                               │
//! │  render::drawer(...) ──► stdout                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
