//! # Error Types
//!
//! Domain-specific error types for neon-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  neon-core errors (this file)                                          │
//! │  ├── CoreError        - Catalog / lookup failures                      │
//! │  └── ValidationError  - Input and catalog validation failures          │
//! │                                                                         │
//! │  neon-storage errors (separate crate)                                  │
//! │  └── StorageError     - Slot I/O, JSON, catalog loading                │
//! │                                                                         │
//! │  NOTE: the cart reducer has NO error type. Every cart operation        │
//! │  succeeds; bad quantities mean "remove", unknown products price at 0.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// Raised by presentation-facing lookups (e.g. resolving a product a user
/// typed on the command line), never by the cart reducer itself.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id or slug in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The product exists but has no variant with this id.
    #[error("Product {product_id} has no variant {variant_id}")]
    VariantNotFound {
        product_id: String,
        variant_id: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input and catalog validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. a quantity that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g. two products sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::VariantNotFound {
            product_id: "galaga-cab".to_string(),
            variant_id: "cocktail".to_string(),
        };
        assert_eq!(err.to_string(), "Product galaga-cab has no variant cocktail");

        let err = ValidationError::Duplicate {
            field: "product id".to_string(),
            value: "pac-01".to_string(),
        };
        assert_eq!(err.to_string(), "product id 'pac-01' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "slug".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
