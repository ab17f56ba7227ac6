//! # Command Error Type
//!
//! Unified error type for storefront commands and session startup.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  neon add pac-man-upright --variant cocktail                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<String, AppError>                                        │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown product? ─── CoreError::ProductNotFound ──┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Bad catalog file? ── StorageError::CatalogParse ─ AppError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ── rendered page ──────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  main() ── anyhow::Result ── "[NotFound] Product not found: xyz"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart persistence failures never show up here: the store logs and
//! swallows them.

use neon_core::{CoreError, ValidationError};
use neon_storage::StorageError;

use crate::state::ConfigError;

/// Error returned from storefront commands and session startup.
#[derive(Debug, Clone)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Product or variant doesn't exist in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Catalog could not be read or parsed
    CatalogError,

    /// Bad configuration
    ConfigError,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// The product catalog could not be read or parsed.
    ///
    /// Only the catalog loader's errors come through here; cart slot
    /// failures are handled inside the store.
    pub fn catalog(err: StorageError) -> Self {
        AppError::new(ErrorCode::CatalogError, err.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => AppError::not_found("Product", &id),
            CoreError::VariantNotFound {
                product_id,
                variant_id,
            } => AppError::not_found("Variant", &format!("{}/{}", product_id, variant_id)),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_not_found() {
        let err = AppError::from(CoreError::ProductNotFound("cab-404".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "[NotFound] Product not found: cab-404");

        let err = AppError::from(CoreError::VariantNotFound {
            product_id: "cab-001".to_string(),
            variant_id: "gold".to_string(),
        });
        assert_eq!(err.message, "Variant not found: cab-001/gold");
    }

    #[test]
    fn test_catalog_errors_keep_their_message() {
        let source = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        let err = AppError::catalog(StorageError::CatalogParse {
            path: "products.json".into(),
            source,
        });
        assert_eq!(err.code, ErrorCode::CatalogError);
        assert!(err.message.contains("products.json"));
    }
}
