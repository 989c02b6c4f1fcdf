//! Error types for the Course actor.

use thiserror::Error;

/// Errors that can occur during course operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourseError {
    /// The requested course was not found.
    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Course name is required")]
    MissingName,

    #[error("Invalid fees: {0}")]
    InvalidFees(f64),

    /// Releasing a seat would overflow the counter.
    #[error("Seat counter overflow on {0}")]
    SeatOverflow(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CourseError {
    fn from(msg: String) -> Self {
        CourseError::ActorCommunicationError(msg)
    }
}
