//! # Waitlist Client
//!
//! The per-course queue built on top of the waitlist store.
use crate::model::{
    sort_queue, CourseId, EnrollmentId, WaitlistEntry, WaitlistEntryCreate, WaitlistEntryId,
    WaitlistFilter,
};
use crate::waitlist_actor::WaitlistError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the Waitlist actor.
#[derive(Clone)]
pub struct WaitlistClient {
    inner: ResourceClient<WaitlistEntry>,
}

impl WaitlistClient {
    pub fn new(inner: ResourceClient<WaitlistEntry>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<WaitlistEntry> for WaitlistClient {
    type Error = WaitlistError;

    fn inner(&self) -> &ResourceClient<WaitlistEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<WaitlistError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => WaitlistError::NotFound(id),
            Err(other) => WaitlistError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl WaitlistClient {
    #[instrument(skip(self))]
    pub async fn enqueue(
        &self,
        course_id: CourseId,
        enrollment_id: EnrollmentId,
        joined_at: DateTime<Utc>,
    ) -> Result<WaitlistEntryId, WaitlistError> {
        debug!("Sending request");
        let params = WaitlistEntryCreate {
            course_id,
            enrollment_id,
            joined_at,
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The longest-waiting entry for a course.
    pub async fn peek_earliest(
        &self,
        course_id: CourseId,
    ) -> Result<Option<WaitlistEntry>, WaitlistError> {
        Ok(self.all_ordered(course_id).await?.into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn dequeue(&self, id: WaitlistEntryId) -> Result<(), WaitlistError> {
        self.delete(id).await
    }

    /// Every entry for a course, earliest first.
    pub async fn all_ordered(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<WaitlistEntry>, WaitlistError> {
        let mut entries = self.find(WaitlistFilter::ByCourse(course_id)).await?;
        sort_queue(&mut entries);
        Ok(entries)
    }

    pub async fn count_pending(&self, course_id: CourseId) -> Result<usize, WaitlistError> {
        Ok(self.find(WaitlistFilter::ByCourse(course_id)).await?.len())
    }

    /// The entry queued for an enrollment, if any.
    pub async fn entry_for(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<WaitlistEntry>, WaitlistError> {
        let found = self
            .find(WaitlistFilter::ByEnrollment(enrollment_id))
            .await?;
        Ok(found.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::ResourceActor;
    use chrono::Duration;

    async fn spawn_waitlist() -> WaitlistClient {
        let (actor, client) = ResourceActor::<WaitlistEntry>::new(16);
        tokio::spawn(actor.run(()));
        WaitlistClient::new(client)
    }

    #[tokio::test]
    async fn test_queue_is_ordered_by_join_time_per_course() {
        let waitlist = spawn_waitlist().await;
        let now = Utc::now();

        waitlist
            .enqueue(CourseId(1), EnrollmentId(10), now + Duration::seconds(2))
            .await
            .unwrap();
        waitlist
            .enqueue(CourseId(2), EnrollmentId(11), now)
            .await
            .unwrap();
        waitlist
            .enqueue(CourseId(1), EnrollmentId(12), now + Duration::seconds(1))
            .await
            .unwrap();

        let order: Vec<EnrollmentId> = waitlist
            .all_ordered(CourseId(1))
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.enrollment_id)
            .collect();
        assert_eq!(order, vec![EnrollmentId(12), EnrollmentId(10)]);
        assert_eq!(waitlist.count_pending(CourseId(1)).await.unwrap(), 2);
        assert_eq!(waitlist.count_pending(CourseId(3)).await.unwrap(), 0);

        let earliest = waitlist.peek_earliest(CourseId(1)).await.unwrap().unwrap();
        assert_eq!(earliest.enrollment_id, EnrollmentId(12));
    }

    #[tokio::test]
    async fn test_equal_join_times_keep_insertion_order() {
        let waitlist = spawn_waitlist().await;
        let now = Utc::now();

        for enrollment in [7, 3, 5] {
            waitlist
                .enqueue(CourseId(1), EnrollmentId(enrollment), now)
                .await
                .unwrap();
        }

        let order: Vec<u32> = waitlist
            .all_ordered(CourseId(1))
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.enrollment_id.0)
            .collect();
        assert_eq!(order, vec![7, 3, 5]);
    }

    #[tokio::test]
    async fn test_dequeue_and_entry_for() {
        let waitlist = spawn_waitlist().await;
        let id = waitlist
            .enqueue(CourseId(1), EnrollmentId(4), Utc::now())
            .await
            .unwrap();

        assert_eq!(
            waitlist.entry_for(EnrollmentId(4)).await.unwrap().map(|e| e.id),
            Some(id)
        );

        waitlist.dequeue(id).await.unwrap();
        assert_eq!(waitlist.entry_for(EnrollmentId(4)).await.unwrap(), None);
        assert!(matches!(
            waitlist.dequeue(id).await,
            Err(WaitlistError::NotFound(_))
        ));
    }
}
