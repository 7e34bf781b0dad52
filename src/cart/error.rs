use thiserror::Error;

use crate::domain::ProductId;

/// Errors surfaced by the cart client.
///
/// The reducer itself is total; the only failure is losing the store actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// A cart map that breaks the store's rules: every line has quantity 1 or more
/// and sits under its own product id.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartStateError {
    #[error("Cart line {0} has quantity 0")]
    ZeroQuantity(ProductId),
    #[error("Cart line stored under {key} holds product {id}")]
    KeyMismatch { key: ProductId, id: ProductId },
}
