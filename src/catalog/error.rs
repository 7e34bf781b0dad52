use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog transport error: {0}")]
    Transport(String),
    #[error("Catalog request failed with status {0}")]
    Status(u16),
    #[error("Catalog decode error: {0}")]
    Decode(String),
    #[error("Failed to read catalog file {path}: {message}")]
    Io { path: String, message: String },
}
