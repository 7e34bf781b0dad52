use tracing::{debug, instrument};

use crate::actor_framework::StoreClient;
use crate::cart::{CartAction, CartError, CartReducer, CartState};
use crate::domain::{Product, ProductId};

/// Client for the cart store actor.
///
/// The only way into the cart: every mutation is a message, every read is a
/// snapshot.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<CartReducer>,
}

impl_basic_client!(CartClient, CartReducer, CartError, cart);

impl CartClient {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(&self, product: Product) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner
            .dispatch(CartAction::Increment(product))
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, product_id: ProductId) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner
            .dispatch(CartAction::Decrement(product_id))
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}
