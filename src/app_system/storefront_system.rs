use tracing::{error, info};

use crate::actor_framework::StoreActor;
use crate::cart::CartReducer;
use crate::clients::CartClient;

use super::AppError;

/// Owns the cart store actor and hands out clients to it.
pub struct StorefrontSystem {
    pub cart_client: CartClient,
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Start the cart store. `buffer_size` bounds the dispatch queue.
    pub fn new(buffer_size: usize) -> Self {
        let (cart_actor, cart_store_client) = StoreActor::<CartReducer>::new(buffer_size);
        let cart_client = CartClient::new(cart_store_client);
        let handle = tokio::spawn(cart_actor.run());
        info!(buffer_size, "Storefront system started");

        Self {
            cart_client,
            handle,
        }
    }

    /// Drop this system's client and wait for the store actor to drain.
    ///
    /// Every other clone of the client must already be gone, or this waits forever.
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(AppError::ActorTask(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
