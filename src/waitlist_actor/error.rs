//! Error types for the Waitlist actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WaitlistError {
    #[error("Waitlist entry not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for WaitlistError {
    fn from(msg: String) -> Self {
        WaitlistError::ActorCommunicationError(msg)
    }
}
