use super::{CourseId, EnrollmentId, StudentId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Outcome of an allocation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    /// The enrollment holds a seat.
    Allocated,
    /// The enrollment is queued for a seat.
    Waitlisted,
}

/// Pass-through payment flag. Nothing in the registry acts on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
}

impl Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Allocated => write!(f, "ALLOCATED"),
            EnrollmentStatus::Waitlisted => write!(f, "WAITLISTED"),
        }
    }
}

/// The ledger record of one student's place in one course.
///
/// `waitlist_position` is `Some` exactly when `status` is [`EnrollmentStatus::Waitlisted`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub status: EnrollmentStatus,
    pub waitlist_position: Option<u32>,
    pub payment_status: PaymentStatus,
}

impl Enrollment {
    pub fn is_allocated(&self) -> bool {
        self.status == EnrollmentStatus::Allocated
    }

    pub fn is_waitlisted(&self) -> bool {
        self.status == EnrollmentStatus::Waitlisted
    }
}

/// Where a new enrollment lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Allocated,
    Waitlisted { position: u32 },
}

/// Payload for recording a new enrollment.
#[derive(Debug, Clone)]
pub struct EnrollmentCreate {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub placement: Placement,
}

/// Fields a caller may change on an existing enrollment.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentUpdate {
    pub payment_status: Option<PaymentStatus>,
}

/// Ledger lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentFilter {
    ByStudent(StudentId),
    ByCourse(CourseId),
    ByStudentAndCourse(StudentId, CourseId),
}
