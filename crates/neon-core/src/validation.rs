//! # Validation Module
//!
//! Sanity checks for catalog data and user-typed input.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Catalog load (neon-storage)                                           │
//! │  ├── JSON shape ──────────── serde (hard failure)                      │
//! │  └── THIS MODULE ─────────── duplicate ids, empty titles, ...          │
//! │                              (logged as warnings, never fatal)          │
//! │                                                                         │
//! │  Command line (storefront)                                             │
//! │  └── parse_quantity ──────── "3" -> 3, "abc" -> error                  │
//! │                                                                         │
//! │  Cart reducer                                                          │
//! │  └── NO validation: qty <= 0 means "remove", anything else is stored   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Checks one product. Returns every problem found, not just the first.
///
/// ## Rules
/// - `id`, `slug`, `title` must not be empty
/// - base and variant prices must not be negative
/// - variant stock must not be negative
/// - variant ids must be unique within the product
pub fn validate_product(product: &Product) -> Vec<ValidationError> {
    let mut problems = Vec::new();

    for (field, value) in [
        ("id", &product.id),
        ("slug", &product.slug),
        ("title", &product.title),
    ] {
        if let Err(e) = required(field, value) {
            problems.push(e);
        }
    }

    if product.price.amount.is_negative() {
        problems.push(ValidationError::Negative {
            field: format!("{} price", product.id),
        });
    }

    let mut seen = HashSet::new();
    for variant in &product.variants {
        if !seen.insert(variant.id.as_str()) {
            problems.push(ValidationError::Duplicate {
                field: format!("{} variant id", product.id),
                value: variant.id.clone(),
            });
        }
        if variant.price.amount.is_negative() {
            problems.push(ValidationError::Negative {
                field: format!("{}/{} price", product.id, variant.id),
            });
        }
        if variant.stock < 0 {
            problems.push(ValidationError::Negative {
                field: format!("{}/{} stock", product.id, variant.id),
            });
        }
    }

    problems
}

/// Checks the whole catalog: every product plus unique product ids.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for product in catalog.iter() {
        if !seen.insert(product.id.as_str()) {
            problems.push(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id.clone(),
            });
        }
        problems.extend(validate_product(product));
    }

    problems
}

/// Parses a quantity typed by the user.
///
/// Any integer is accepted, including zero and negatives: the reducer
/// treats those as "remove".
///
/// ## Example
/// ```rust
/// use neon_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 3 "), Ok(3));
/// assert_eq!(parse_quantity("-1"), Ok(-1));
/// assert!(parse_quantity("three").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let trimmed = input.trim();
    required("quantity", trimmed)?;
    trimmed
        .parse::<i64>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: e.to_string(),
        })
}
