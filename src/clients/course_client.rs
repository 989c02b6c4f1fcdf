//! # Course Client
//!
//! Seat-counter operations on the resource store.
use crate::course_actor::{CourseAction, CourseActionResult, CourseError};
use crate::model::{Course, CourseCreate, CourseId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Course actor.
#[derive(Clone)]
pub struct CourseClient {
    inner: ResourceClient<Course>,
}

impl CourseClient {
    pub fn new(inner: ResourceClient<Course>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Course> for CourseClient {
    type Error = CourseError;

    fn inner(&self) -> &ResourceClient<Course> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CourseError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CourseError::NotFound(id),
            Err(other) => CourseError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CourseClient {
    /// Adds a course and returns the stored record.
    #[instrument(skip(self))]
    pub async fn add_course(&self, params: CourseCreate) -> Result<Course, CourseError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id)
            .await?
            .ok_or_else(|| CourseError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn exists(&self, id: CourseId) -> Result<bool, CourseError> {
        Ok(self.get(id).await?.is_some())
    }

    /// All courses in the order they were added.
    pub async fn list(&self) -> Result<Vec<Course>, CourseError> {
        self.find(()).await
    }

    /// Current number of free seats.
    #[instrument(skip(self))]
    pub async fn check_seats(&self, id: CourseId) -> Result<u32, CourseError> {
        match self.action(id, CourseAction::CheckSeats).await? {
            CourseActionResult::CheckSeats(seats) => Ok(seats),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Takes one seat if any is left. `Ok(false)` means the course is full.
    #[instrument(skip(self))]
    pub async fn try_consume_seat(&self, id: CourseId) -> Result<bool, CourseError> {
        match self.action(id, CourseAction::TryConsumeSeat).await? {
            CourseActionResult::TryConsumeSeat(granted) => Ok(granted),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Gives one seat back and returns the new count.
    #[instrument(skip(self))]
    pub async fn release_seat(&self, id: CourseId) -> Result<u32, CourseError> {
        match self.action(id, CourseAction::ReleaseSeat).await? {
            CourseActionResult::ReleaseSeat(seats) => Ok(seats),
            other => Err(Self::unexpected(other)),
        }
    }

    async fn action(
        &self,
        id: CourseId,
        action: CourseAction,
    ) -> Result<CourseActionResult, CourseError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    fn unexpected(result: CourseActionResult) -> CourseError {
        CourseError::ActorCommunicationError(format!("mismatched action result: {result:?}"))
    }
}
