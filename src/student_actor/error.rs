//! Error types for the Student actor.

use thiserror::Error;

/// Errors that can occur during student operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StudentError {
    /// The requested student was not found.
    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("First name is required")]
    MissingFirstName,

    #[error("Contact number is required")]
    MissingContactNumber,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StudentError {
    fn from(msg: String) -> Self {
        StudentError::ActorCommunicationError(msg)
    }
}
