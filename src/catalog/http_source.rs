//! Reqwest-backed catalog source: one unauthenticated GET, no retries.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info, instrument};

use super::{decode_products, CatalogError, CatalogSource};
use crate::domain::Product;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

pub struct HttpCatalogSource {
    client: Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, CatalogError> {
        let client = Client::builder().build().map_err(map_transport_error)?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    #[instrument(name = "fetch_catalog", skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending catalog request");
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        check_status(status)?;

        let products = decode_products(body.as_ref())?;
        info!(product_count = products.len(), "Catalog loaded");
        Ok(products)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

fn check_status(status: StatusCode) -> Result<(), CatalogError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(map_status_error(status))
    }
}

fn map_status_error(status: StatusCode) -> CatalogError {
    CatalogError::Status(status.as_u16())
}

fn map_transport_error(error: reqwest::Error) -> CatalogError {
    CatalogError::Transport(error.to_string())
}
