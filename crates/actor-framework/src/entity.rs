//! # ActorEntity Trait
//!
//! The contract every stored record (a student, a course, an enrollment, a waitlist entry)
//! implements so that a single generic [`ResourceActor`](crate::ResourceActor) can own it.
//!
//! Associated types pin down the payload of every request: a `Course` store only accepts
//! `CourseCreate` payloads and `CourseAction`s, and the compiler rejects anything else.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other actors. The `Context` type is handed
/// to every hook by [`ResourceActor::run`](crate::ResourceActor::run), which lets
/// dependencies be wired after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// Ids are minted from a `u32` counter and the store is ordered by id, so iteration
    /// order equals creation order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `TryConsumeSeat`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Selection criteria for [`ResourceRequest::Find`](crate::ResourceRequest::Find).
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per action: clients match on a single
    /// type, at the cost of every action nominally being able to return every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    ///
    /// An implementation that returns `Err` must leave `self` unchanged.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
