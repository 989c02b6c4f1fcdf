//! Demo run of the registry: seeds a catalog, fills a course, and shows promotion from
//! the waitlist when a seat frees up.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! REGISTRY_SEAT_RELEASE_POLICY=always RUST_LOG=debug cargo run
//! ```

use course_registry::config::RegistryConfig;
use course_registry::lifecycle::{setup_tracing, RegistrationSystem};
use course_registry::model::{CourseCreate, PaymentStatus, StudentCreate};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = RegistryConfig::from_env();
    info!(?config, "Starting course registry");

    let system = RegistrationSystem::start(&config).await?;
    let registrar = system.registrar.clone();

    if registrar.list_courses().await?.is_empty() {
        system
            .seed(vec![
                CourseCreate {
                    course_name: "Systems Programming".to_string(),
                    duration: "10 weeks".to_string(),
                    fees: 750.0,
                    available_seats: 1,
                },
                CourseCreate {
                    course_name: "Distributed Systems".to_string(),
                    duration: "8 weeks".to_string(),
                    fees: 820.0,
                    available_seats: 2,
                },
            ])
            .await?;
    }
    let courses = registrar.list_courses().await?;
    let systems = courses[0].id;
    let distributed = courses[courses.len() - 1].id;

    let ada = registrar
        .register_student(StudentCreate::new("Ada", "555-0100").with_last_name("Lovelace"))
        .await?;
    let grace = registrar
        .register_student(StudentCreate::new("Grace", "555-0101").with_last_name("Hopper"))
        .await?;
    let alan = registrar
        .register_student(StudentCreate::new("Alan", "555-0102"))
        .await?;

    let span = tracing::info_span!("enrollment");
    async {
        for student in [&ada, &grace, &alan] {
            let enrollment = registrar.enroll(systems, student.id).await?;
            info!(
                student = %student.full_name(),
                status = %enrollment.status,
                position = ?enrollment.waitlist_position,
                "Enrollment processed"
            );
        }
        registrar
            .record_payment(systems, ada.id, PaymentStatus::Completed)
            .await?;
        Ok::<_, course_registry::registrar::RegistrationError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("promotion");
    async {
        if let Some(promoted) = registrar.drop_course(systems, ada.id).await? {
            info!(student_id = %promoted.student_id, "Seat handed to the waitlist head");
        }
        for enrollment in registrar.waitlist(systems).await? {
            info!(student_id = %enrollment.student_id, position = ?enrollment.waitlist_position, "Still waiting");
        }

        let moved = registrar.swap_course(alan.id, systems, distributed).await?;
        info!(student_id = %moved.student_id, course_id = %moved.course_id, status = %moved.status, "Swapped course");

        registrar.deregister_student(grace.id).await?;
        let seats = registrar.course(systems).await?.available_seats;
        info!(seats, "Seats left after deregistration");
        Ok::<_, course_registry::registrar::RegistrationError>(())
    }
    .instrument(span)
    .await?;

    drop(registrar);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
