//! [`ActorEntity`] implementation for [`WaitlistEntry`].
//!
//! Entries are immutable once queued: they are created and deleted, nothing else.

use super::WaitlistError;
use crate::model::{WaitlistEntry, WaitlistEntryCreate, WaitlistEntryId, WaitlistFilter};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Waitlist entries support no custom actions.
#[derive(Debug, Clone, Copy)]
pub enum WaitlistAction {}

#[async_trait]
impl ActorEntity for WaitlistEntry {
    type Id = WaitlistEntryId;
    type Create = WaitlistEntryCreate;
    type Update = ();
    type Action = WaitlistAction;
    type ActionResult = ();
    type Filter = WaitlistFilter;
    type Context = ();
    type Error = WaitlistError;

    fn from_create_params(
        id: WaitlistEntryId,
        params: WaitlistEntryCreate,
    ) -> Result<Self, WaitlistError> {
        Ok(Self {
            id,
            course_id: params.course_id,
            enrollment_id: params.enrollment_id,
            joined_at: params.joined_at,
        })
    }

    fn matches(&self, filter: &WaitlistFilter) -> bool {
        match *filter {
            WaitlistFilter::ByCourse(course) => self.course_id == course,
            WaitlistFilter::ByEnrollment(enrollment) => self.enrollment_id == enrollment,
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), WaitlistError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: WaitlistAction,
        _ctx: &(),
    ) -> Result<(), WaitlistError> {
        match action {}
    }
}
