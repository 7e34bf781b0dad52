//! Catalog loading: one fetch of the product list at startup.

pub mod error;
pub mod file_source;
pub mod http_source;

pub use error::*;
pub use file_source::*;
pub use http_source::*;

use async_trait::async_trait;

use crate::domain::Product;

/// Where the product list comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Decode a JSON array of products.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_slice(body)
        .map_err(|error| CatalogError::Decode(format!("invalid catalog JSON payload: {error}")))
}

#[cfg(test)]
pub struct InMemoryCatalogSource {
    pub products: Vec<Product>,
}

#[cfg(test)]
#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
pub(crate) const SAMPLE_CATALOG: &str = r#"[
    {
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    },
    {
        "id": 2,
        "title": "Mens Casual Premium Slim Fit T-Shirts",
        "price": 22.3,
        "description": "Slim-fitting style, contrast raglan long sleeve.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg"
    },
    {
        "id": 5,
        "title": "John Hardy Women's Legends Naga Bracelet",
        "price": 695,
        "description": "From our Legends Collection.",
        "category": "jewelery",
        "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
        "rating": { "rate": 4.6, "count": 400 }
    }
]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;

    #[test]
    fn test_decode_sample_catalog() {
        let products = decode_products(SAMPLE_CATALOG.as_bytes()).unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, ProductId(1));
        assert!(products[1].rating.is_none());
        assert_eq!(products[2].price, 695.0);
    }

    #[test]
    fn test_decode_empty_catalog() {
        assert_eq!(decode_products(b"[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_products(br#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));

        let err = decode_products(br#"[{"id": "one", "title": "x", "price": 1}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
