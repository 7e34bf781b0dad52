macro_rules! impl_client_new {
    ($client_name:ident, $reducer:ty) => {
        impl $client_name {
            pub fn new(inner: crate::actor_framework::StoreClient<$reducer>) -> Self {
                Self { inner }
            }
        }
    };
}

/// Read-side methods shared by every store-backed client: a snapshot query
/// named `$snapshot_fn` and `subscribe`.
macro_rules! impl_client_methods {
    ($client_name:ident, $reducer:ty, $error:ty, $snapshot_fn:ident) => {
        impl $client_name {
            #[tracing::instrument(skip(self))]
            pub async fn $snapshot_fn(
                &self,
            ) -> Result<<$reducer as crate::actor_framework::Reducer>::State, $error> {
                tracing::debug!("Sending request");
                self.inner
                    .snapshot()
                    .await
                    .map_err(|e| <$error>::ActorCommunicationError(e.to_string()))
            }

            pub fn subscribe(
                &self,
            ) -> tokio::sync::watch::Receiver<<$reducer as crate::actor_framework::Reducer>::State>
            {
                self.inner.subscribe()
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $reducer:ty, $error:ty, $snapshot_fn:ident) => {
        impl_client_new!($client_name, $reducer);
        impl_client_methods!($client_name, $reducer, $error, $snapshot_fn);
    };
}
