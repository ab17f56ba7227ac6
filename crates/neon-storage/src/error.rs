//! # Storage Error Types
//!
//! Error types for slot and catalog I/O.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds slot key / path context             │
//! │       │                                                                 │
//! │       ├──► CartPersistence: logged and SWALLOWED                       │
//! │       │    (cart keeps working in memory)                               │
//! │       │                                                                 │
//! │       └──► CatalogLoader: returned to the storefront                   │
//! │            (no catalog, nothing to render)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a cart slot failed.
    ///
    /// ## When This Occurs
    /// - Slot file exists but is unreadable (permissions)
    /// - Storage backend unavailable
    #[error("Failed to read slot '{key}': {source}")]
    SlotRead {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a cart slot failed.
    ///
    /// ## When This Occurs
    /// - Disk full ("quota exceeded")
    /// - Data directory not writable
    #[error("Failed to write slot '{key}': {source}")]
    SlotWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Slot contents are not a valid cart snapshot.
    #[error("Slot '{key}' holds a malformed cart snapshot: {source}")]
    CorruptSnapshot {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the cart snapshot failed.
    #[error("Failed to encode cart snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// Catalog file could not be read.
    #[error("Failed to read catalog {path:?}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not a valid product list.
    #[error("Catalog {path:?} is not a valid product list: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = StorageError::SlotWrite {
            key: "playback-neon-cart".to_string(),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write slot 'playback-neon-cart': disk full"
        );
    }
}
