//! # Catalog Loader
//!
//! Fetches the static product list (a JSON array of products) once at
//! startup. The fetch is the only asynchronous step in the storefront; it
//! never touches the cart.

use std::path::{Path, PathBuf};

use neon_core::validation::validate_catalog;
use neon_core::{Catalog, Product};
use tracing::{info, warn};

use crate::error::{StorageError, StorageResult};

#[derive(Debug, Clone)]
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        CatalogLoader { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the catalog.
    ///
    /// Data problems that don't break the JSON shape (duplicate ids, empty
    /// titles, ...) are logged and the catalog is returned anyway.
    pub async fn load(&self) -> StorageResult<Catalog> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StorageError::CatalogRead {
                path: self.path.clone(),
                source,
            })?;

        let catalog = self.parse(&contents)?;
        info!(path = ?self.path, products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Parses catalog JSON that was obtained elsewhere.
    pub fn parse(&self, contents: &str) -> StorageResult<Catalog> {
        let products: Vec<Product> =
            serde_json::from_str(contents).map_err(|source| StorageError::CatalogParse {
                path: self.path.clone(),
                source,
            })?;

        let catalog = Catalog::from_products(products);
        for problem in validate_catalog(&catalog) {
            warn!(path = ?self.path, %problem, "Catalog data problem");
        }
        Ok(catalog)
    }
}
