//! Errors returned by the [`Registrar`](super::Registrar).

use crate::course_actor::CourseError;
use crate::enrollment_actor::EnrollmentError;
use crate::model::{CourseId, StudentId};
use crate::student_actor::StudentError;
use crate::waitlist_actor::WaitlistError;
use thiserror::Error;

/// Broad classification callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A student, course or enrollment required by the call does not exist.
    NotFound,
    /// The student already has an enrollment for the course.
    Conflict,
    /// The input was rejected by a store (blank name, negative fees, ...).
    Invalid,
    /// Stored state is inconsistent or an actor could not be reached.
    Internal,
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("Course not found: {0}")]
    CourseNotFound(CourseId),

    #[error("No enrollment for {student} in {course}")]
    EnrollmentNotFound { student: StudentId, course: CourseId },

    #[error("{student} is already enrolled in {course}")]
    AlreadyEnrolled { student: StudentId, course: CourseId },

    /// The ledger and the waitlist disagree. Nothing was changed.
    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error(transparent)]
    Student(#[from] StudentError),

    #[error(transparent)]
    Course(#[from] CourseError),

    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),

    #[error(transparent)]
    Waitlist(#[from] WaitlistError),
}

impl RegistrationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::StudentNotFound(_)
            | RegistrationError::CourseNotFound(_)
            | RegistrationError::EnrollmentNotFound { .. } => ErrorKind::NotFound,
            RegistrationError::AlreadyEnrolled { .. } => ErrorKind::Conflict,
            RegistrationError::Integrity(_) => ErrorKind::Internal,
            RegistrationError::Student(err) => match err {
                StudentError::NotFound(_) => ErrorKind::NotFound,
                StudentError::MissingFirstName | StudentError::MissingContactNumber => {
                    ErrorKind::Invalid
                }
                StudentError::ActorCommunicationError(_) => ErrorKind::Internal,
            },
            RegistrationError::Course(err) => match err {
                CourseError::NotFound(_) => ErrorKind::NotFound,
                CourseError::MissingName | CourseError::InvalidFees(_) => ErrorKind::Invalid,
                CourseError::SeatOverflow(_) | CourseError::ActorCommunicationError(_) => {
                    ErrorKind::Internal
                }
            },
            RegistrationError::Enrollment(err) => match err {
                EnrollmentError::NotFound(_) => ErrorKind::NotFound,
                EnrollmentError::NotWaitlisted(_)
                | EnrollmentError::NotAllocated(_)
                | EnrollmentError::InvalidPosition(_)
                | EnrollmentError::ActorCommunicationError(_) => ErrorKind::Internal,
            },
            RegistrationError::Waitlist(err) => match err {
                WaitlistError::NotFound(_) => ErrorKind::NotFound,
                WaitlistError::ActorCommunicationError(_) => ErrorKind::Internal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            RegistrationError::StudentNotFound(StudentId(1)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            RegistrationError::AlreadyEnrolled {
                student: StudentId(1),
                course: CourseId(2)
            }
            .kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            RegistrationError::from(StudentError::MissingFirstName).kind(),
            ErrorKind::Invalid
        );
        assert_eq!(
            RegistrationError::from(CourseError::ActorCommunicationError("closed".into())).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            RegistrationError::Integrity("orphan entry".into()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_messages_name_the_ids() {
        let err = RegistrationError::EnrollmentNotFound {
            student: StudentId(4),
            course: CourseId(9),
        };
        assert_eq!(err.to_string(), "No enrollment for student_4 in course_9");
    }
}
