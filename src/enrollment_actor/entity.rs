//! [`ActorEntity`] implementation for [`Enrollment`].

use super::{EnrollmentAction, EnrollmentError};
use crate::model::{
    Enrollment, EnrollmentCreate, EnrollmentFilter, EnrollmentId, EnrollmentStatus,
    EnrollmentUpdate, PaymentStatus, Placement,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Enrollment {
    type Id = EnrollmentId;
    type Create = EnrollmentCreate;
    type Update = EnrollmentUpdate;
    type Action = EnrollmentAction;
    type ActionResult = Enrollment;
    type Filter = EnrollmentFilter;
    type Context = ();
    type Error = EnrollmentError;

    fn from_create_params(
        id: EnrollmentId,
        params: EnrollmentCreate,
    ) -> Result<Self, EnrollmentError> {
        let (status, waitlist_position) = match params.placement {
            Placement::Allocated => (EnrollmentStatus::Allocated, None),
            Placement::Waitlisted { position: 0 } => {
                return Err(EnrollmentError::InvalidPosition(0))
            }
            Placement::Waitlisted { position } => (EnrollmentStatus::Waitlisted, Some(position)),
        };

        Ok(Self {
            id,
            student_id: params.student_id,
            course_id: params.course_id,
            status,
            waitlist_position,
            payment_status: PaymentStatus::Pending,
        })
    }

    fn matches(&self, filter: &EnrollmentFilter) -> bool {
        match *filter {
            EnrollmentFilter::ByStudent(student) => self.student_id == student,
            EnrollmentFilter::ByCourse(course) => self.course_id == course,
            EnrollmentFilter::ByStudentAndCourse(student, course) => {
                self.student_id == student && self.course_id == course
            }
        }
    }

    async fn on_update(
        &mut self,
        update: EnrollmentUpdate,
        _ctx: &(),
    ) -> Result<(), EnrollmentError> {
        if let Some(payment_status) = update.payment_status {
            self.payment_status = payment_status;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: EnrollmentAction,
        _ctx: &(),
    ) -> Result<Enrollment, EnrollmentError> {
        match action {
            EnrollmentAction::Rank(0) | EnrollmentAction::Demote { position: 0, .. } => {
                return Err(EnrollmentError::InvalidPosition(0))
            }
            EnrollmentAction::Demote {
                position,
                payment_status,
            } => {
                if !self.is_allocated() {
                    return Err(EnrollmentError::NotAllocated(self.id.to_string()));
                }
                self.status = EnrollmentStatus::Waitlisted;
                self.waitlist_position = Some(position);
                self.payment_status = payment_status;
            }
            _ if !self.is_waitlisted() => {
                return Err(EnrollmentError::NotWaitlisted(self.id.to_string()))
            }
            EnrollmentAction::Promote => {
                self.status = EnrollmentStatus::Allocated;
                self.waitlist_position = None;
                self.payment_status = PaymentStatus::Pending;
            }
            EnrollmentAction::Rank(position) => self.waitlist_position = Some(position),
        }
        Ok(self.clone())
    }
}
