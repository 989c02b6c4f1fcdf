//! # Waitlist Actor
//!
//! Storage for waitlist entries. The store only keeps entries; queue order is imposed by
//! [`WaitlistClient::all_ordered`](crate::clients::WaitlistClient::all_ordered), which sorts
//! by join time and falls back to entry id, so equal timestamps keep insertion order.

pub mod entity;
pub mod error;

pub use entity::WaitlistAction;
pub use error::*;

use crate::clients::WaitlistClient;
use crate::model::WaitlistEntry;
use actor_framework::ResourceActor;

/// Creates a new Waitlist actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<WaitlistEntry>, WaitlistClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, WaitlistClient::new(generic_client))
}
