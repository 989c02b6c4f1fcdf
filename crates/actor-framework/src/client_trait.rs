//! # ActorClient Trait
//!
//! Shared read/remove operations for domain clients that wrap a [`ResourceClient`].
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors provide access to the inner client and a mapping from
/// [`FrameworkError`] into their own error type; `get`, `delete` and `find` come for free.
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Seat { id: u32 }
/// #[derive(Debug)] struct SeatCreate;
/// #[derive(Debug)] enum SeatAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct SeatError(String);
/// impl From<String> for SeatError { fn from(s: String) -> Self { SeatError(s) } }
///
/// #[async_trait]
/// impl ActorEntity for Seat {
///     type Id = u32; type Create = SeatCreate; type Update = (); type Action = SeatAction;
///     type ActionResult = (); type Filter = (); type Context = (); type Error = SeatError;
///     fn from_create_params(id: u32, _: SeatCreate) -> Result<Self, SeatError> { Ok(Self { id }) }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), SeatError> { Ok(()) }
///     async fn handle_action(&mut self, a: SeatAction, _: &()) -> Result<(), SeatError> { match a {} }
/// }
///
/// struct SeatClient { inner: ResourceClient<Seat> }
///
/// #[async_trait]
/// impl ActorClient<Seat> for SeatClient {
///     type Error = SeatError;
///     fn inner(&self) -> &ResourceClient<Seat> { &self.inner }
///     fn map_error(e: FrameworkError) -> SeatError { SeatError(e.to_string()) }
/// }
///
/// async fn usage(client: SeatClient) {
///     let _ = client.get(1).await;
///     let _ = client.find(()).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity selected by `filter`.
    #[tracing::instrument(skip(self))]
    async fn find(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(filter).await.map_err(Self::map_error)
    }
}
