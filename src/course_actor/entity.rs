//! [`ActorEntity`] implementation for [`Course`].
//!
//! See [`CourseAction`] for the seat-counter contract.

use super::{CourseAction, CourseActionResult, CourseError};
use crate::model::{Course, CourseCreate, CourseId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Course {
    type Id = CourseId;
    type Create = CourseCreate;
    type Update = ();
    type Action = CourseAction;
    type ActionResult = CourseActionResult;
    type Filter = ();
    type Context = ();
    type Error = CourseError;

    fn from_create_params(id: CourseId, params: CourseCreate) -> Result<Self, CourseError> {
        let course_name = params.course_name.trim();
        if course_name.is_empty() {
            return Err(CourseError::MissingName);
        }
        if !params.fees.is_finite() || params.fees < 0.0 {
            return Err(CourseError::InvalidFees(params.fees));
        }

        Ok(Self {
            id,
            course_name: course_name.to_string(),
            duration: params.duration,
            fees: params.fees,
            available_seats: params.available_seats,
        })
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), CourseError> {
        Ok(())
    }

    /// Handles seat-counter actions.
    ///
    /// # Actions
    /// - `CheckSeats`: current counter
    /// - `TryConsumeSeat`: decrement if above zero, report whether it happened
    /// - `ReleaseSeat`: increment, report the new counter
    async fn handle_action(
        &mut self,
        action: CourseAction,
        _ctx: &(),
    ) -> Result<CourseActionResult, CourseError> {
        match action {
            CourseAction::CheckSeats => Ok(CourseActionResult::CheckSeats(self.available_seats)),
            CourseAction::TryConsumeSeat => match self.available_seats.checked_sub(1) {
                Some(remaining) => {
                    self.available_seats = remaining;
                    Ok(CourseActionResult::TryConsumeSeat(true))
                }
                None => Ok(CourseActionResult::TryConsumeSeat(false)),
            },
            CourseAction::ReleaseSeat => {
                self.available_seats = self
                    .available_seats
                    .checked_add(1)
                    .ok_or_else(|| CourseError::SeatOverflow(self.id.to_string()))?;
                Ok(CourseActionResult::ReleaseSeat(self.available_seats))
            }
        }
    }
}
