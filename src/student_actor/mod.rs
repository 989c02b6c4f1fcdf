//! # Student Actor
//!
//! The requester directory. The registrar only asks it whether a student exists and
//! removes students on deregistration; registration and listing round it out.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Student`]
//! - [`error`] - [`StudentError`]
//! - [`new()`] - factory returning the actor and its [`StudentClient`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::StudentClient;
use crate::model::Student;
use actor_framework::ResourceActor;

/// Creates a new Student actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Student>, StudentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, StudentClient::new(generic_client))
}
