//! # Enrollment Client
//!
//! Ledger lookups and the waitlist transitions of a single record.
use crate::enrollment_actor::{EnrollmentAction, EnrollmentError};
use crate::model::{
    CourseId, Enrollment, EnrollmentCreate, EnrollmentFilter, EnrollmentId, EnrollmentUpdate,
    PaymentStatus, StudentId,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Enrollment actor.
#[derive(Clone)]
pub struct EnrollmentClient {
    inner: ResourceClient<Enrollment>,
}

impl EnrollmentClient {
    pub fn new(inner: ResourceClient<Enrollment>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Enrollment> for EnrollmentClient {
    type Error = EnrollmentError;

    fn inner(&self) -> &ResourceClient<Enrollment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<EnrollmentError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => EnrollmentError::NotFound(id),
            Err(other) => EnrollmentError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl EnrollmentClient {
    /// Stores a new record and returns it.
    ///
    /// If the record was stored but cannot be read back, it is removed again so the
    /// caller never has to clean up after a failed `record`.
    #[instrument(skip(self))]
    pub async fn record(&self, params: EnrollmentCreate) -> Result<Enrollment, EnrollmentError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        match self.get(id).await {
            Ok(Some(enrollment)) => Ok(enrollment),
            Ok(None) => Err(EnrollmentError::NotFound(id.to_string())),
            Err(err) => {
                if let Err(cleanup) = self.inner.delete(id).await {
                    warn!(enrollment_id = %id, error = %cleanup, "Failed to discard unreadable enrollment");
                }
                Err(err)
            }
        }
    }

    /// The record for a (student, course) pair, if any.
    #[instrument(skip(self))]
    pub async fn find_by_pair(
        &self,
        student: StudentId,
        course: CourseId,
    ) -> Result<Option<Enrollment>, EnrollmentError> {
        let found = self
            .find(EnrollmentFilter::ByStudentAndCourse(student, course))
            .await?;
        Ok(found.into_iter().next())
    }

    pub async fn find_by_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<Enrollment>, EnrollmentError> {
        self.find(EnrollmentFilter::ByStudent(student)).await
    }

    pub async fn find_by_course(&self, course: CourseId) -> Result<Vec<Enrollment>, EnrollmentError> {
        self.find(EnrollmentFilter::ByCourse(course)).await
    }

    /// Turns a waitlisted record into an allocated one.
    #[instrument(skip(self))]
    pub async fn promote(&self, id: EnrollmentId) -> Result<Enrollment, EnrollmentError> {
        self.action(id, EnrollmentAction::Promote).await
    }

    /// Sets the waitlist position of a waitlisted record.
    #[instrument(skip(self))]
    pub async fn rank(&self, id: EnrollmentId, position: u32) -> Result<Enrollment, EnrollmentError> {
        self.action(id, EnrollmentAction::Rank(position)).await
    }

    /// Puts an allocated record back on the waitlist at `position`.
    #[instrument(skip(self))]
    pub async fn demote(
        &self,
        id: EnrollmentId,
        position: u32,
        payment_status: PaymentStatus,
    ) -> Result<Enrollment, EnrollmentError> {
        self.action(
            id,
            EnrollmentAction::Demote {
                position,
                payment_status,
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn update_payment(
        &self,
        id: EnrollmentId,
        payment_status: PaymentStatus,
    ) -> Result<Enrollment, EnrollmentError> {
        debug!("Sending request");
        let update = EnrollmentUpdate {
            payment_status: Some(payment_status),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: EnrollmentId) -> Result<(), EnrollmentError> {
        self.delete(id).await
    }

    async fn action(
        &self,
        id: EnrollmentId,
        action: EnrollmentAction,
    ) -> Result<Enrollment, EnrollmentError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnrollmentStatus, Placement};
    use actor_framework::mock::{create_mock_client, expect_create, expect_find, expect_get};

    fn allocated(id: u32) -> Enrollment {
        Enrollment {
            id: EnrollmentId(id),
            student_id: StudentId(1),
            course_id: CourseId(1),
            status: EnrollmentStatus::Allocated,
            waitlist_position: None,
            payment_status: PaymentStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_record_creates_then_reads_back() {
        let (client, mut receiver) = create_mock_client::<Enrollment>(10);
        let ledger = EnrollmentClient::new(client);

        let task = tokio::spawn(async move {
            ledger
                .record(EnrollmentCreate {
                    student_id: StudentId(1),
                    course_id: CourseId(1),
                    placement: Placement::Allocated,
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.placement, Placement::Allocated);
        responder.send(Ok(EnrollmentId(5))).unwrap();

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, EnrollmentId(5));
        responder.send(Ok(Some(allocated(5)))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(allocated(5)));
    }

    #[tokio::test]
    async fn test_find_by_pair_uses_pair_filter() {
        let (client, mut receiver) = create_mock_client::<Enrollment>(10);
        let ledger = EnrollmentClient::new(client);

        let task =
            tokio::spawn(async move { ledger.find_by_pair(StudentId(1), CourseId(1)).await });

        let (filter, responder) = expect_find(&mut receiver)
            .await
            .expect("Expected Find request");
        assert_eq!(
            filter,
            EnrollmentFilter::ByStudentAndCourse(StudentId(1), CourseId(1))
        );
        responder.send(Ok(vec![allocated(2)])).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some(allocated(2))));
    }
}
