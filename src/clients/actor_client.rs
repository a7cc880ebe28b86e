use crate::framework::{FrameworkError, QueueClient, QueueEntity};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard queue reads.
///
/// Provides default `get` and `list_pending` on top of the generic
/// [`QueueClient`]; implementors only supply access and error mapping.
#[async_trait]
pub trait ActorClient<T: QueueEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic QueueClient.
    fn inner(&self) -> &QueueClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of a queued entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every queued entity, oldest first.
    #[tracing::instrument(skip(self))]
    async fn list_pending(&self) -> Result<Vec<(T::Id, T)>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
