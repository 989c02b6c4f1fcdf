use crate::catalog::{load_catalog, seed_courses, CatalogError};
use crate::clients::{CourseClient, EnrollmentClient, StudentClient, WaitlistClient};
use crate::config::RegistryConfig;
use crate::model::Course;
use crate::registrar::Registrar;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running registry: four store actors and the registrar wired on top of them.
///
/// ```rust
/// use course_registry::config::RegistryConfig;
/// use course_registry::lifecycle::RegistrationSystem;
/// use course_registry::model::{CourseCreate, StudentCreate};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = RegistrationSystem::new(&RegistryConfig::default());
///
///     let course = system.registrar.add_course(CourseCreate::new("Rust", 1)).await?;
///     let ada = system.registrar.register_student(StudentCreate::new("Ada", "555-0100")).await?;
///     let enrollment = system.registrar.enroll(course.id, ada.id).await?;
///     assert!(enrollment.is_allocated());
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct RegistrationSystem {
    pub registrar: Registrar,
    pub student_client: StudentClient,
    pub course_client: CourseClient,
    pub enrollment_client: EnrollmentClient,
    pub waitlist_client: WaitlistClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl RegistrationSystem {
    /// Spawns the store actors and builds the registrar. Must be called inside a Tokio runtime.
    pub fn new(config: &RegistryConfig) -> Self {
        let capacity = config.mailbox_capacity;

        let (student_actor, student_client) = crate::student_actor::new(capacity);
        let (course_actor, course_client) = crate::course_actor::new(capacity);
        let (enrollment_actor, enrollment_client) = crate::enrollment_actor::new(capacity);
        let (waitlist_actor, waitlist_client) = crate::waitlist_actor::new(capacity);

        let handles = vec![
            tokio::spawn(student_actor.run(())),
            tokio::spawn(course_actor.run(())),
            tokio::spawn(enrollment_actor.run(())),
            tokio::spawn(waitlist_actor.run(())),
        ];

        let registrar = Registrar::new(
            student_client.clone(),
            course_client.clone(),
            enrollment_client.clone(),
            waitlist_client.clone(),
            config.seat_release_policy,
        );
        info!(policy = %config.seat_release_policy, capacity, "Registration system started");

        Self {
            registrar,
            student_client,
            course_client,
            enrollment_client,
            waitlist_client,
            handles,
        }
    }

    /// Starts the system and seeds the configured course catalog, if any.
    pub async fn start(config: &RegistryConfig) -> Result<Self, CatalogError> {
        let system = Self::new(config);
        if let Some(path) = &config.course_catalog {
            let catalog = load_catalog(path).await?;
            system.seed(catalog).await?;
        }
        Ok(system)
    }

    pub async fn seed(
        &self,
        catalog: Vec<crate::model::CourseCreate>,
    ) -> Result<Vec<Course>, CatalogError> {
        seed_courses(&self.course_client, catalog).await
    }

    /// Drops every client and waits for the actors to drain and exit.
    ///
    /// Clones of the registrar or of any client held elsewhere keep their actor alive,
    /// so drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.registrar);
        drop(self.student_client);
        drop(self.course_client);
        drop(self.enrollment_client);
        drop(self.waitlist_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
