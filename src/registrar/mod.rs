//! # Registrar
//!
//! The allocation engine. Every public operation enters here, validates against the
//! student and course stores, adjusts one seat counter, then updates the enrollment
//! ledger and the waitlist queue.
//!
//! ## Atomicity
//!
//! Allocate, release and promote for one course run under that course's lock from
//! [`CourseLocks`], so a seat change, its ledger record and the queue re-rank are never
//! interleaved with another operation on the same course. Other courses proceed in
//! parallel.
//!
//! New enrollments and deregistration also hold the student's lock from [`StudentLocks`],
//! taken before any course lock. No enrollment can appear for a student while that
//! student is being removed.
//!
//! Within an operation, every precondition and every ledger/queue consistency check runs
//! before the first write. The writes that follow record a compensation each; if any
//! later write fails, including the promotion and re-rank that follow a release, the
//! recorded compensations run in reverse.
//!
//! Swap and deregister are sequences of releases and allocations, each locked on its own
//! course. They are not atomic as a whole.

mod error;
mod locks;

pub use error::*;
pub use locks::{CourseLocks, KeyedLocks, StudentLocks};

use crate::clients::{CourseClient, EnrollmentClient, StudentClient, WaitlistClient};
use crate::config::SeatReleasePolicy;
use crate::model::{
    Course, CourseCreate, CourseId, Enrollment, EnrollmentCreate, EnrollmentId, PaymentStatus,
    next_join_time, Placement, Student, StudentCreate, StudentId, WaitlistEntry,
};
use actor_framework::ActorClient;
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, error, info, instrument, warn};

/// A queued entry together with the ledger record it points at.
#[derive(Debug, Clone)]
struct Queued {
    entry: WaitlistEntry,
    enrollment: Enrollment,
}

/// Undo step for a write that already succeeded.
#[derive(Debug)]
enum Compensation {
    ReleaseSeat(CourseId),
    ConsumeSeat(CourseId),
    /// Puts a dequeued entry back. It gets a new id but keeps its join time.
    Requeue(WaitlistEntry),
    DiscardEnrollment(EnrollmentId),
    /// Returns a promoted record to the waitlist as it was.
    Demote(Enrollment),
    Rank(EnrollmentId, u32),
}

/// Orchestrates allocation, release, promotion, swap and deregistration.
///
/// Cheap to clone: it holds only clients and a shared lock table.
#[derive(Clone)]
pub struct Registrar {
    students: StudentClient,
    courses: CourseClient,
    enrollments: EnrollmentClient,
    waitlist: WaitlistClient,
    locks: CourseLocks,
    student_locks: StudentLocks,
    policy: SeatReleasePolicy,
}

impl Registrar {
    pub fn new(
        students: StudentClient,
        courses: CourseClient,
        enrollments: EnrollmentClient,
        waitlist: WaitlistClient,
        policy: SeatReleasePolicy,
    ) -> Self {
        Self {
            students,
            courses,
            enrollments,
            waitlist,
            locks: CourseLocks::new(),
            student_locks: StudentLocks::new(),
            policy,
        }
    }

    pub fn seat_release_policy(&self) -> SeatReleasePolicy {
        self.policy
    }

    // =========================================================================
    // Allocation engine
    // =========================================================================

    /// Enrolls a student: a seat if one is free, otherwise the back of the waitlist.
    ///
    /// Fails with `StudentNotFound`, `CourseNotFound` or `AlreadyEnrolled`, checked in
    /// that order, before anything is written.
    #[instrument(skip(self))]
    pub async fn enroll(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<Enrollment, RegistrationError> {
        let _student = self.student_locks.lock(student).await;
        let _guard = self.locks.lock(course).await;
        self.allocate(course, student).await
    }

    /// Drops a student's enrollment in a course and fills the freed seat from the waitlist.
    ///
    /// Returns the enrollment that was promoted, if any.
    #[instrument(skip(self))]
    pub async fn drop_course(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<Option<Enrollment>, RegistrationError> {
        let _guard = self.locks.lock(course).await;
        self.release(course, student).await
    }

    /// Promotes the longest-waiting student if the course has a free seat.
    ///
    /// Drops already promote on their own; this covers seats that appear by other means.
    #[instrument(skip(self))]
    pub async fn promote_waitlisted(
        &self,
        course: CourseId,
    ) -> Result<Option<Enrollment>, RegistrationError> {
        let _guard = self.locks.lock(course).await;
        if !self.courses.exists(course).await? {
            return Err(RegistrationError::CourseNotFound(course));
        }
        let queue = self.checked_queue(course, None).await?;
        let mut undo = Vec::new();
        let promoted = self.promote_head(course, &queue, &mut undo).await;
        self.settle(promoted, undo).await
    }

    /// Moves a student from one course to another: a drop followed by an enrollment.
    ///
    /// Both courses must exist. If the drop succeeds and the enrollment then fails, the
    /// student is left enrolled in neither.
    #[instrument(skip(self))]
    pub async fn swap_course(
        &self,
        student: StudentId,
        from: CourseId,
        to: CourseId,
    ) -> Result<Enrollment, RegistrationError> {
        let _student = self.student_locks.lock(student).await;
        for course in [from, to] {
            if !self.courses.exists(course).await? {
                return Err(RegistrationError::CourseNotFound(course));
            }
        }

        {
            let _guard = self.locks.lock(from).await;
            self.release(from, student).await?;
        }

        let _guard = self.locks.lock(to).await;
        self.allocate(to, student).await.inspect_err(|err| {
            warn!(%student, %from, %to, error = %err, "Swap dropped the old course but could not enroll in the new one");
        })
    }

    /// Drops every enrollment of a student, then removes the student.
    ///
    /// Holds the student's lock throughout, so a concurrent `enroll` either lands before
    /// and is released here, or runs after and finds no student.
    #[instrument(skip(self))]
    pub async fn deregister_student(&self, student: StudentId) -> Result<(), RegistrationError> {
        let _student = self.student_locks.lock(student).await;
        if !self.students.exists(student).await? {
            return Err(RegistrationError::StudentNotFound(student));
        }

        for enrollment in self.enrollments.find_by_student(student).await? {
            let course = enrollment.course_id;
            let _guard = self.locks.lock(course).await;
            match self.release(course, student).await {
                // A concurrent drop got there first.
                Ok(_) | Err(RegistrationError::EnrollmentNotFound { .. }) => {}
                Err(err) => return Err(err),
            }
        }

        if let Some(left) = self.enrollments.find_by_student(student).await?.first() {
            return Err(RegistrationError::Integrity(format!(
                "{} still held by {student} after deregistration",
                left.id
            )));
        }
        self.students.remove(student).await?;
        info!("Student deregistered");
        Ok(())
    }

    /// Every enrollment of a student, in the order they were made.
    #[instrument(skip(self))]
    pub async fn list_enrollments(
        &self,
        student: StudentId,
    ) -> Result<Vec<Enrollment>, RegistrationError> {
        if !self.students.exists(student).await? {
            return Err(RegistrationError::StudentNotFound(student));
        }
        Ok(self.enrollments.find_by_student(student).await?)
    }

    // =========================================================================
    // Directory, catalog and ledger queries
    // =========================================================================

    pub async fn register_student(
        &self,
        params: StudentCreate,
    ) -> Result<Student, RegistrationError> {
        let student = self.students.register(params).await?;
        info!(student_id = %student.id, "Student registered");
        Ok(student)
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, RegistrationError> {
        Ok(self.students.list().await?)
    }

    pub async fn add_course(&self, params: CourseCreate) -> Result<Course, RegistrationError> {
        let course = self.courses.add_course(params).await?;
        info!(course_id = %course.id, seats = course.available_seats, "Course added");
        Ok(course)
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, RegistrationError> {
        Ok(self.courses.list().await?)
    }

    pub async fn course(&self, course: CourseId) -> Result<Course, RegistrationError> {
        self.courses
            .get(course)
            .await?
            .ok_or(RegistrationError::CourseNotFound(course))
    }

    /// The course's waitlisted enrollments in queue order.
    #[instrument(skip(self))]
    pub async fn waitlist(&self, course: CourseId) -> Result<Vec<Enrollment>, RegistrationError> {
        let _guard = self.locks.lock(course).await;
        if !self.courses.exists(course).await? {
            return Err(RegistrationError::CourseNotFound(course));
        }
        let queue = self.checked_queue(course, None).await?;
        Ok(queue.into_iter().map(|queued| queued.enrollment).collect())
    }

    /// Sets the pass-through payment flag on an existing enrollment.
    #[instrument(skip(self))]
    pub async fn record_payment(
        &self,
        course: CourseId,
        student: StudentId,
        status: PaymentStatus,
    ) -> Result<Enrollment, RegistrationError> {
        let _guard = self.locks.lock(course).await;
        let enrollment = self
            .enrollments
            .find_by_pair(student, course)
            .await?
            .ok_or(RegistrationError::EnrollmentNotFound { student, course })?;
        Ok(self.enrollments.update_payment(enrollment.id, status).await?)
    }

    // =========================================================================
    // Steps run under the course lock
    // =========================================================================

    async fn allocate(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<Enrollment, RegistrationError> {
        if !self.students.exists(student).await? {
            return Err(RegistrationError::StudentNotFound(student));
        }
        if !self.courses.exists(course).await? {
            return Err(RegistrationError::CourseNotFound(course));
        }
        if self.enrollments.find_by_pair(student, course).await?.is_some() {
            return Err(RegistrationError::AlreadyEnrolled { student, course });
        }

        let mut undo = Vec::new();
        let placed = self.place(course, student, &mut undo).await;
        self.settle(placed, undo).await
    }

    async fn place(
        &self,
        course: CourseId,
        student: StudentId,
        undo: &mut Vec<Compensation>,
    ) -> Result<Enrollment, RegistrationError> {
        if self.courses.try_consume_seat(course).await? {
            undo.push(Compensation::ReleaseSeat(course));
            let enrollment = self
                .enrollments
                .record(EnrollmentCreate {
                    student_id: student,
                    course_id: course,
                    placement: Placement::Allocated,
                })
                .await?;
            info!(enrollment_id = %enrollment.id, "Seat allocated");
            return Ok(enrollment);
        }

        let queued = self.waitlist.all_ordered(course).await?;
        let position = rank_of(queued.len())?;
        let enrollment = self
            .enrollments
            .record(EnrollmentCreate {
                student_id: student,
                course_id: course,
                placement: Placement::Waitlisted { position },
            })
            .await?;
        undo.push(Compensation::DiscardEnrollment(enrollment.id));
        let joined_at = next_join_time(queued.last().map(|entry| entry.joined_at), Utc::now());
        self.waitlist
            .enqueue(course, enrollment.id, joined_at)
            .await?;
        info!(enrollment_id = %enrollment.id, position, "Course full, student waitlisted");
        Ok(enrollment)
    }

    async fn release(
        &self,
        course: CourseId,
        student: StudentId,
    ) -> Result<Option<Enrollment>, RegistrationError> {
        let enrollment = self
            .enrollments
            .find_by_pair(student, course)
            .await?
            .ok_or(RegistrationError::EnrollmentNotFound { student, course })?;

        let own_entry = if enrollment.is_waitlisted() {
            let entry = self.waitlist.entry_for(enrollment.id).await?.ok_or_else(|| {
                RegistrationError::Integrity(format!("{} is waitlisted but not queued", enrollment.id))
            })?;
            Some(entry)
        } else {
            None
        };
        let remaining = self.checked_queue(course, Some(enrollment.id)).await?;
        let frees_seat = self.policy.frees_seat(enrollment.status);

        let mut undo = Vec::new();
        let released = self
            .remove_enrollment(course, &enrollment, own_entry, frees_seat, &remaining, &mut undo)
            .await;
        self.settle(released, undo).await
    }

    /// Frees the seat and queue slot, promotes and re-ranks, then deletes the record.
    ///
    /// The record goes last so that every earlier step can still be undone.
    async fn remove_enrollment(
        &self,
        course: CourseId,
        enrollment: &Enrollment,
        own_entry: Option<WaitlistEntry>,
        frees_seat: bool,
        remaining: &[Queued],
        undo: &mut Vec<Compensation>,
    ) -> Result<Option<Enrollment>, RegistrationError> {
        if frees_seat {
            let seats = self.courses.release_seat(course).await?;
            undo.push(Compensation::ConsumeSeat(course));
            debug!(seats, "Seat released");
        }
        if let Some(entry) = own_entry {
            self.waitlist.dequeue(entry.id).await?;
            undo.push(Compensation::Requeue(entry));
        }
        let promoted = self.promote_head(course, remaining, undo).await?;
        self.enrollments.remove(enrollment.id).await?;
        info!(enrollment_id = %enrollment.id, status = %enrollment.status, frees_seat, "Enrollment released");
        Ok(promoted)
    }

    /// Gives the head of `queue` a seat if one can be claimed, then re-ranks the rest.
    ///
    /// Without a free seat nothing is dequeued; positions are still made dense.
    async fn promote_head(
        &self,
        course: CourseId,
        queue: &[Queued],
        undo: &mut Vec<Compensation>,
    ) -> Result<Option<Enrollment>, RegistrationError> {
        let Some((head, rest)) = queue.split_first() else {
            return Ok(None);
        };

        if !self.courses.try_consume_seat(course).await? {
            debug!(queued = queue.len(), "No free seat, waitlist kept");
            self.rerank(queue, undo).await?;
            return Ok(None);
        }
        undo.push(Compensation::ReleaseSeat(course));

        self.waitlist.dequeue(head.entry.id).await?;
        undo.push(Compensation::Requeue(head.entry.clone()));
        let promoted = self.enrollments.promote(head.enrollment.id).await?;
        undo.push(Compensation::Demote(head.enrollment.clone()));
        info!(enrollment_id = %promoted.id, student_id = %promoted.student_id, "Promoted from waitlist");

        self.rerank(rest, undo).await?;
        Ok(Some(promoted))
    }

    /// Assigns positions 1..N in queue order, skipping records already in place.
    async fn rerank(
        &self,
        queue: &[Queued],
        undo: &mut Vec<Compensation>,
    ) -> Result<(), RegistrationError> {
        for (index, queued) in queue.iter().enumerate() {
            let position = rank_of(index)?;
            let previous = queued.enrollment.waitlist_position;
            if previous == Some(position) {
                continue;
            }
            let id = queued.enrollment.id;
            self.enrollments
                .rank(id, position)
                .await
                .inspect_err(|err| error!(enrollment_id = %id, error = %err, "Re-rank interrupted"))?;
            if let Some(previous) = previous {
                undo.push(Compensation::Rank(id, previous));
            }
        }
        Ok(())
    }

    /// Loads the course's queue and checks it against the ledger.
    ///
    /// Every entry must point at an existing WAITLISTED record of this course, and every
    /// WAITLISTED record must be queued. `excluding` leaves one enrollment out of both
    /// checks and of the result.
    async fn checked_queue(
        &self,
        course: CourseId,
        excluding: Option<EnrollmentId>,
    ) -> Result<Vec<Queued>, RegistrationError> {
        let entries = self.waitlist.all_ordered(course).await?;
        let mut ledger: HashMap<EnrollmentId, Enrollment> = self
            .enrollments
            .find_by_course(course)
            .await?
            .into_iter()
            .map(|enrollment| (enrollment.id, enrollment))
            .collect();
        if let Some(excluded) = excluding {
            ledger.remove(&excluded);
        }

        let mut queue = Vec::with_capacity(entries.len());
        for entry in entries {
            if Some(entry.enrollment_id) == excluding {
                continue;
            }
            match ledger.remove(&entry.enrollment_id) {
                Some(enrollment) if enrollment.is_waitlisted() => {
                    queue.push(Queued { entry, enrollment })
                }
                Some(enrollment) => {
                    return Err(RegistrationError::Integrity(format!(
                        "{} is queued but {} is {}",
                        entry.id, enrollment.id, enrollment.status
                    )))
                }
                None => {
                    return Err(RegistrationError::Integrity(format!(
                        "{} references missing {}",
                        entry.id, entry.enrollment_id
                    )))
                }
            }
        }

        if let Some(orphan) = ledger.values().find(|enrollment| enrollment.is_waitlisted()) {
            return Err(RegistrationError::Integrity(format!(
                "{} is waitlisted but not queued",
                orphan.id
            )));
        }
        Ok(queue)
    }

    /// Passes `result` through, undoing `undo` first if it is an error.
    async fn settle<T>(
        &self,
        result: Result<T, RegistrationError>,
        undo: Vec<Compensation>,
    ) -> Result<T, RegistrationError> {
        if result.is_err() {
            self.compensate(undo).await;
        }
        result
    }

    async fn compensate(&self, undo: Vec<Compensation>) {
        for step in undo.into_iter().rev() {
            let outcome = match &step {
                Compensation::ReleaseSeat(course) => self
                    .courses
                    .release_seat(*course)
                    .await
                    .map(|_| ())
                    .map_err(RegistrationError::from),
                Compensation::ConsumeSeat(course) => {
                    match self.courses.try_consume_seat(*course).await {
                        Ok(true) => Ok(()),
                        Ok(false) => Err(RegistrationError::Integrity(format!(
                            "{course} has no seat to take back"
                        ))),
                        Err(err) => Err(err.into()),
                    }
                }
                Compensation::Requeue(entry) => self
                    .waitlist
                    .enqueue(entry.course_id, entry.enrollment_id, entry.joined_at)
                    .await
                    .map(|_| ())
                    .map_err(RegistrationError::from),
                Compensation::DiscardEnrollment(id) => {
                    self.enrollments.remove(*id).await.map_err(RegistrationError::from)
                }
                Compensation::Demote(before) => match before.waitlist_position {
                    Some(position) => self
                        .enrollments
                        .demote(before.id, position, before.payment_status)
                        .await
                        .map(|_| ())
                        .map_err(RegistrationError::from),
                    None => Err(RegistrationError::Integrity(format!(
                        "{} had no waitlist position to return to",
                        before.id
                    ))),
                },
                Compensation::Rank(id, position) => self
                    .enrollments
                    .rank(*id, *position)
                    .await
                    .map(|_| ())
                    .map_err(RegistrationError::from),
            };
            match outcome {
                Ok(()) => warn!(?step, "Rolled back"),
                Err(err) => error!(?step, error = %err, "Rollback step failed"),
            }
        }
    }
}

/// 1-based position for a 0-based queue index or count.
fn rank_of(index: usize) -> Result<u32, RegistrationError> {
    index
        .checked_add(1)
        .and_then(|rank| u32::try_from(rank).ok())
        .ok_or_else(|| RegistrationError::Integrity(format!("waitlist position {index} out of range")))
}
