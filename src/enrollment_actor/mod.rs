//! # Enrollment Actor
//!
//! The enrollment ledger: one record per (student, course) attempt, either holding a seat
//! or queued with a waitlist position.
//!
//! The entity itself enforces that a position is present exactly while the record is
//! waitlisted; [`EnrollmentAction::Promote`] and [`EnrollmentAction::Rank`] refuse to
//! touch records that are not waitlisted. Uniqueness per pair is the registrar's job,
//! since it needs a lookup across records.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::EnrollmentClient;
use crate::model::Enrollment;
use actor_framework::ResourceActor;

/// Creates a new Enrollment actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Enrollment>, EnrollmentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, EnrollmentClient::new(generic_client))
}
