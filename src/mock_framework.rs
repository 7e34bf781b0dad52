//! # Mock Framework
//!
//! Utilities for testing clients without a running store actor.
//!
//! [`create_mock_client`] returns a client and the receiving end of its request
//! channel; helpers like [`expect_dispatch`] pull the next request off it so the
//! test can assert on it and answer.

use tokio::sync::{mpsc, watch};

use crate::actor_framework::{Reducer, Response, StoreClient, StoreRequest};

pub fn create_mock_client<R: Reducer>(
    buffer_size: usize,
) -> (StoreClient<R>, mpsc::Receiver<StoreRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, subscriber) = watch::channel(R::State::default());
    (StoreClient::new(sender, subscriber), receiver)
}

/// Next request, if it is a Dispatch.
pub async fn expect_dispatch<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Action, Response<R::State>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Snapshot.
pub async fn expect_snapshot<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<Response<R::State>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, CartReducer, CartState};
    use crate::clients::CartClient;
    use crate::domain::{Product, ProductId};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<CartReducer>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.remove_item(ProductId(3)).await });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        match action {
            CartAction::Decrement(id) => assert_eq!(id, ProductId(3)),
            other => panic!("Unexpected action: {:?}", other),
        }
        responder.send(CartState::default()).unwrap();

        assert!(task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_snapshot() {
        let (inner, mut receiver) = create_mock_client::<CartReducer>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.cart().await });

        let responder = expect_snapshot(&mut receiver)
            .await
            .expect("Expected Snapshot request");
        let state = crate::cart::increment(&CartState::default(), Product::new(8, "Pen", 1.5));
        responder.send(state.clone()).unwrap();

        assert_eq!(task.await.unwrap(), Ok(state));
    }
}
