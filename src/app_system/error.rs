use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::presentation::CommandError;

/// Everything that can end or interrupt a storefront run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
