//! Error types for the Enrollment actor.

use thiserror::Error;

/// Errors that can occur during enrollment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EnrollmentError {
    /// The requested enrollment was not found.
    #[error("Enrollment not found: {0}")]
    NotFound(String),

    /// A waitlist transition was requested on a record that holds a seat.
    #[error("Enrollment {0} is not waitlisted")]
    NotWaitlisted(String),

    /// A demotion was requested on a record that is already waitlisted.
    #[error("Enrollment {0} is not allocated")]
    NotAllocated(String),

    /// Waitlist positions start at 1.
    #[error("Invalid waitlist position: {0}")]
    InvalidPosition(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for EnrollmentError {
    fn from(msg: String) -> Self {
        EnrollmentError::ActorCommunicationError(msg)
    }
}
