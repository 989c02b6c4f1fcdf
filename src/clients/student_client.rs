use crate::model::{Student, StudentCreate, StudentId};
use crate::student_actor::StudentError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the requester directory.
#[derive(Clone)]
pub struct StudentClient {
    inner: ResourceClient<Student>,
}

impl StudentClient {
    pub fn new(inner: ResourceClient<Student>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Student> for StudentClient {
    type Error = StudentError;

    fn inner(&self) -> &ResourceClient<Student> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<StudentError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => StudentError::NotFound(id),
            Err(other) => StudentError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl StudentClient {
    /// Registers a student and returns the stored record.
    #[instrument(skip(self))]
    pub async fn register(&self, params: StudentCreate) -> Result<Student, StudentError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id)
            .await?
            .ok_or_else(|| StudentError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn exists(&self, id: StudentId) -> Result<bool, StudentError> {
        Ok(self.get(id).await?.is_some())
    }

    /// All students in registration order.
    pub async fn list(&self) -> Result<Vec<Student>, StudentError> {
        self.find(()).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: StudentId) -> Result<(), StudentError> {
        debug!("Sending request");
        self.delete(id).await
    }
}
