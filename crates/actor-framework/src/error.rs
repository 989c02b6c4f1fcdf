//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, plus a boxed carrier for entity errors.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Id space exhausted")]
    IdsExhausted,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed error an entity hook returned.
    ///
    /// Returns `Err(self)` unchanged when this is not an `EntityError` of type `E`, so
    /// callers can fall through to their own mapping of the remaining variants.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|err| *err)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("no seats left")]
    struct NoSeats;

    #[test]
    fn test_downcast_entity_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(NoSeats));
        assert_eq!(err.downcast_entity::<NoSeats>().unwrap(), NoSeats);
    }

    #[test]
    fn test_downcast_entity_passes_other_variants_through() {
        let err = FrameworkError::NotFound("course_7".to_string());
        match err.downcast_entity::<NoSeats>() {
            Err(FrameworkError::NotFound(id)) => assert_eq!(id, "course_7"),
            other => panic!("unexpected: {other:?}"),
        }

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            foreign.downcast_entity::<NoSeats>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
