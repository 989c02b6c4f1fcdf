//! # Observability & Tracing
//!
//! Structured logging for the whole registry.
//!
//! - **Actor loop**: startup, shutdown and every request, tagged with `entity_type`
//! - **Clients**: `#[instrument]` spans carrying the ids of each call
//! - **Registrar**: allocation outcomes, promotions and rollbacks at info/warn/error
//!
//! ```bash
//! RUST_LOG=info cargo run     # outcomes only
//! RUST_LOG=debug cargo run    # every request with its payload
//! ```
//!
//! A drop that promotes someone reads like this at `info`:
//!
//! ```text
//! INFO drop_course: Enrollment released course=CourseId(1) student=StudentId(1) enrollment_id=enrollment_1 status=ALLOCATED frees_seat=true
//! INFO drop_course: Promoted from waitlist course=CourseId(1) student=StudentId(1) enrollment_id=enrollment_2 student_id=student_2
//! ```

/// Installs a compact fmt subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and span names already say where a line came from
        .compact()
        .init();
}
