use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, instrument};

use super::{decode_products, CatalogError, CatalogSource};
use crate::domain::Product;

/// Reads the catalog from a JSON file shaped like the remote API response.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    #[instrument(name = "read_catalog", skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|error| CatalogError::Io {
                path: self.path.display().to_string(),
                message: error.to_string(),
            })?;

        let products = decode_products(&body)?;
        info!(product_count = products.len(), "Catalog loaded");
        Ok(products)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
