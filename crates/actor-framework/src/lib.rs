//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource stores on Tokio.
//!
//! Every kind of record gets its own actor: a task that owns an ordered in-memory store
//! and handles one request at a time. Callers talk to it through a cloneable client.
//! Because the actor is the only owner of its store, a check-and-modify performed inside
//! one request is atomic without any lock, while independent actors run in parallel.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record, its payloads and its invariants
//! 2. **Runtime Layer** ([`ResourceActor`]) - the sequential message loop and the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/response
//!
//! ## Requests
//!
//! Create, Get, Update, Delete and Action address a single record by id. Find returns
//! every record selected by the entity's [`ActorEntity::Filter`], in id order, which is
//! also creation order.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`] rather than to the constructor, so
//! actors can be created first and wired afterwards:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: u32, value: u64 }
//! #[derive(Debug)] struct CounterCreate;
//! #[derive(Debug)] enum CounterAction { Bump }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = ();
//!     type Action = CounterAction;
//!     type ActionResult = u64;
//!     type Filter = ();
//!     type Context = u64; // step size, injected at run time
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, CounterError> {
//!         Ok(Self { id, value: 0 })
//!     }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn on_update(&mut self, _: (), _: &u64) -> Result<(), CounterError> { Ok(()) }
//!     async fn handle_action(&mut self, _: CounterAction, step: &u64) -> Result<u64, CounterError> {
//!         self.value += *step;
//!         Ok(self.value)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(8);
//!     tokio::spawn(actor.run(5));
//!
//!     let id = client.create(CounterCreate).await.unwrap();
//!     assert_eq!(client.perform_action(id, CounterAction::Bump).await.unwrap(), 5);
//!     assert_eq!(client.find(()).await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient` and channel-level helpers for testing code
//! that holds a `ResourceClient` without spawning the real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
