//! # Course Actor
//!
//! The resource store: owns every course and its `available_seats` counter.
//!
//! Seat changes are custom actions, so each one is a single message handled by the
//! actor's sequential loop. `TryConsumeSeat` checks and decrements in that one step,
//! which is what keeps two callers from both taking the last seat.
//!
//! ```rust,ignore
//! if course_client.try_consume_seat(course_id).await? {
//!     // seat granted
//! }
//! course_client.release_seat(course_id).await?;
//! ```
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Course`]
//! - [`actions`] - [`CourseAction`] and [`CourseActionResult`]
//! - [`error`] - [`CourseError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CourseClient;
use crate::model::Course;
use actor_framework::ResourceActor;

/// Creates a new Course actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Course>, CourseClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CourseClient::new(generic_client))
}
