use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// A pure state transition managed by a [`StoreActor`].
///
/// The actor owns the only copy of `State` that is ever written; everything
/// outside of it works on cloned snapshots.
pub trait Reducer: Send + 'static {
    type State: Clone + Default + Debug + Send + Sync + 'static;
    type Action: Debug + Send + 'static;

    /// Compute the next state. Must not touch `state` itself.
    fn reduce(state: &Self::State, action: Self::Action) -> Self::State;

    /// Whether `next` is a different snapshot from `prev`.
    ///
    /// Subscribers are only notified when this returns `true`.
    fn changed(prev: &Self::State, next: &Self::State) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum StoreRequest<R: Reducer> {
    Dispatch {
        action: R::Action,
        respond_to: Response<R::State>,
    },
    Snapshot {
        respond_to: Response<R::State>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct StoreActor<R: Reducer> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    state: R::State,
    publisher: watch::Sender<R::State>,
}

impl<R: Reducer> StoreActor<R> {
    /// Build an actor holding `R::State::default()` and a client connected to it.
    ///
    /// `buffer_size` must be greater than zero.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let state = R::State::default();
        let (publisher, subscriber) = watch::channel(state.clone());
        let actor = Self {
            receiver,
            state,
            publisher,
        };
        (actor, StoreClient::new(sender, subscriber))
    }

    /// Serve requests until every client has been dropped.
    #[instrument(name = "store_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Store actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    self.handle_dispatch(action, respond_to);
                }
                StoreRequest::Snapshot { respond_to } => {
                    self.handle_snapshot(respond_to);
                }
            }
        }

        info!("Store actor stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_dispatch(&mut self, action: R::Action, respond_to: Response<R::State>) {
        debug!("Processing dispatch request");

        let next = R::reduce(&self.state, action);
        if R::changed(&self.state, &next) {
            self.state = next;
            self.publisher.send_replace(self.state.clone());
            debug!("State changed");
        } else {
            debug!("Dispatch left state unchanged");
        }

        let _ = respond_to.send(self.state.clone());
    }

    fn handle_snapshot(&self, respond_to: Response<R::State>) {
        debug!("Processing snapshot request");
        let _ = respond_to.send(self.state.clone());
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct StoreClient<R: Reducer> {
    sender: mpsc::Sender<StoreRequest<R>>,
    subscriber: watch::Receiver<R::State>,
}

// Derived `Clone` would demand `R: Clone`.
impl<R: Reducer> Clone for StoreClient<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            subscriber: self.subscriber.clone(),
        }
    }
}

impl<R: Reducer> StoreClient<R> {
    pub(crate) fn new(
        sender: mpsc::Sender<StoreRequest<R>>,
        subscriber: watch::Receiver<R::State>,
    ) -> Self {
        Self { sender, subscriber }
    }

    /// Apply `action` and return the snapshot it produced.
    pub async fn dispatch(&self, action: R::Action) -> Result<R::State, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn snapshot(&self) -> Result<R::State, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Receiver that wakes on every state change made after this call.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        let mut subscriber = self.subscriber.clone();
        subscriber.borrow_and_update();
        subscriber
    }
}
