use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use course_registry::clients::{CourseClient, EnrollmentClient, StudentClient, WaitlistClient};
use course_registry::config::SeatReleasePolicy;
use course_registry::course_actor::CourseActionResult;
use course_registry::model::{
    Course, CourseId, Enrollment, EnrollmentId, EnrollmentStatus, PaymentStatus, Student,
    StudentId, WaitlistEntry, WaitlistEntryId,
};
use course_registry::registrar::{ErrorKind, Registrar, RegistrationError};

/// Registrar wired to scripted stores instead of real actors.
struct Harness {
    students: MockClient<Student>,
    courses: MockClient<Course>,
    enrollments: MockClient<Enrollment>,
    waitlist: MockClient<WaitlistEntry>,
}

impl Harness {
    fn new() -> Self {
        Self {
            students: MockClient::new(),
            courses: MockClient::new(),
            enrollments: MockClient::new(),
            waitlist: MockClient::new(),
        }
    }

    fn registrar(&self) -> Registrar {
        Registrar::new(
            StudentClient::new(self.students.client()),
            CourseClient::new(self.courses.client()),
            EnrollmentClient::new(self.enrollments.client()),
            WaitlistClient::new(self.waitlist.client()),
            SeatReleasePolicy::AllocatedOnly,
        )
    }

    fn verify(&self) {
        self.students.verify();
        self.courses.verify();
        self.enrollments.verify();
        self.waitlist.verify();
    }
}

fn student(id: u32) -> Student {
    Student {
        id: StudentId(id),
        first_name: "Ada".to_string(),
        last_name: None,
        contact_number: "555-0100".to_string(),
    }
}

fn course(id: u32, seats: u32) -> Course {
    Course {
        id: CourseId(id),
        course_name: "Compilers".to_string(),
        duration: "10 weeks".to_string(),
        fees: 0.0,
        available_seats: seats,
    }
}

fn enrollment(id: u32, status: EnrollmentStatus, position: Option<u32>) -> Enrollment {
    Enrollment {
        id: EnrollmentId(id),
        student_id: StudentId(1),
        course_id: CourseId(1),
        status,
        waitlist_position: position,
        payment_status: PaymentStatus::Pending,
    }
}

#[tokio::test]
async fn test_missing_student_touches_nothing_else() {
    let mut h = Harness::new();
    h.students.expect_get(StudentId(1)).return_ok(None);

    let err = h.registrar().enroll(CourseId(1), StudentId(1)).await.unwrap_err();

    assert!(matches!(err, RegistrationError::StudentNotFound(StudentId(1))));
    h.verify();
}

#[tokio::test]
async fn test_seat_is_given_back_when_the_ledger_write_fails() {
    let mut h = Harness::new();
    h.students.expect_get(StudentId(1)).return_ok(Some(student(1)));
    h.courses.expect_get(CourseId(1)).return_ok(Some(course(1, 1)));
    h.enrollments.expect_find().return_ok(vec![]);
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::TryConsumeSeat(true));
    h.enrollments
        .expect_create()
        .return_err(FrameworkError::ActorClosed);
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::ReleaseSeat(1));

    let err = h.registrar().enroll(CourseId(1), StudentId(1)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
    h.verify();
}

#[tokio::test]
async fn test_waitlisted_record_is_discarded_when_enqueue_fails() {
    let mut h = Harness::new();
    h.students.expect_get(StudentId(1)).return_ok(Some(student(1)));
    h.courses.expect_get(CourseId(1)).return_ok(Some(course(1, 0)));
    h.enrollments.expect_find().return_ok(vec![]);
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::TryConsumeSeat(false));
    h.waitlist.expect_find().return_ok(vec![]);
    h.enrollments.expect_create().return_ok(EnrollmentId(3));
    h.enrollments
        .expect_get(EnrollmentId(3))
        .return_ok(Some(enrollment(3, EnrollmentStatus::Waitlisted, Some(1))));
    h.waitlist
        .expect_create()
        .return_err(FrameworkError::ActorClosed);
    h.enrollments.expect_delete(EnrollmentId(3)).return_ok(());

    let err = h.registrar().enroll(CourseId(1), StudentId(1)).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Waitlist(_)));
    h.verify();
}

#[tokio::test]
async fn test_queue_pointing_at_missing_enrollment_aborts_drop_before_any_write() {
    let mut h = Harness::new();
    h.enrollments
        .expect_find()
        .return_ok(vec![enrollment(1, EnrollmentStatus::Allocated, None)]);
    h.waitlist.expect_find().return_ok(vec![WaitlistEntry {
        id: WaitlistEntryId(1),
        course_id: CourseId(1),
        enrollment_id: EnrollmentId(9),
        joined_at: chrono::Utc::now(),
    }]);
    h.enrollments
        .expect_find()
        .return_ok(vec![enrollment(1, EnrollmentStatus::Allocated, None)]);

    let err = h
        .registrar()
        .drop_course(CourseId(1), StudentId(1))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::Integrity(_)));
    assert_eq!(err.kind(), ErrorKind::Internal);
    h.verify();
}

fn queued(id: u32, enrollment: u32) -> WaitlistEntry {
    WaitlistEntry {
        id: WaitlistEntryId(id),
        course_id: CourseId(1),
        enrollment_id: EnrollmentId(enrollment),
        joined_at: chrono::Utc::now(),
    }
}

/// Course 1 ledger: student 1 holds the seat, students 2 and 3 wait at positions 1 and 3.
fn full_course_with_two_waiting(h: &mut Harness) {
    let seated = enrollment(1, EnrollmentStatus::Allocated, None);
    let second = Enrollment {
        student_id: StudentId(2),
        ..enrollment(2, EnrollmentStatus::Waitlisted, Some(1))
    };
    let third = Enrollment {
        student_id: StudentId(3),
        ..enrollment(3, EnrollmentStatus::Waitlisted, Some(3))
    };

    h.enrollments.expect_find().return_ok(vec![seated.clone()]);
    h.waitlist
        .expect_find()
        .return_ok(vec![queued(2, 2), queued(3, 3)]);
    h.enrollments
        .expect_find()
        .return_ok(vec![seated, second, third]);
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::ReleaseSeat(1));
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::TryConsumeSeat(true));
    h.waitlist.expect_delete(WaitlistEntryId(2)).return_ok(());
}

#[tokio::test]
async fn test_failed_rerank_after_promotion_rolls_the_whole_drop_back() {
    let mut h = Harness::new();
    full_course_with_two_waiting(&mut h);
    h.enrollments.expect_action(EnrollmentId(2)).return_ok(Enrollment {
        student_id: StudentId(2),
        ..enrollment(2, EnrollmentStatus::Allocated, None)
    });
    h.enrollments
        .expect_action(EnrollmentId(3))
        .return_err(FrameworkError::ActorClosed);

    // Undo, newest first: demote 2, requeue it, hand the promotion seat back, retake
    // the dropped seat. The dropped record is never deleted.
    h.enrollments.expect_action(EnrollmentId(2)).return_ok(Enrollment {
        student_id: StudentId(2),
        ..enrollment(2, EnrollmentStatus::Waitlisted, Some(1))
    });
    h.waitlist.expect_create().return_ok(WaitlistEntryId(4));
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::ReleaseSeat(1));
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::TryConsumeSeat(true));

    let err = h
        .registrar()
        .drop_course(CourseId(1), StudentId(1))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::Enrollment(_)));
    assert_eq!(err.kind(), ErrorKind::Internal);
    h.verify();
}

#[tokio::test]
async fn test_failed_record_delete_undoes_promotion_and_ranks() {
    let mut h = Harness::new();
    full_course_with_two_waiting(&mut h);
    h.enrollments.expect_action(EnrollmentId(2)).return_ok(Enrollment {
        student_id: StudentId(2),
        ..enrollment(2, EnrollmentStatus::Allocated, None)
    });
    h.enrollments.expect_action(EnrollmentId(3)).return_ok(Enrollment {
        student_id: StudentId(3),
        ..enrollment(3, EnrollmentStatus::Waitlisted, Some(1))
    });
    h.enrollments
        .expect_delete(EnrollmentId(1))
        .return_err(FrameworkError::ActorClosed);

    // Undo: rank 3 back to 3, demote 2, requeue it, then both seat moves.
    h.enrollments.expect_action(EnrollmentId(3)).return_ok(Enrollment {
        student_id: StudentId(3),
        ..enrollment(3, EnrollmentStatus::Waitlisted, Some(3))
    });
    h.enrollments.expect_action(EnrollmentId(2)).return_ok(Enrollment {
        student_id: StudentId(2),
        ..enrollment(2, EnrollmentStatus::Waitlisted, Some(1))
    });
    h.waitlist.expect_create().return_ok(WaitlistEntryId(4));
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::ReleaseSeat(1));
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::TryConsumeSeat(true));

    let err = h
        .registrar()
        .drop_course(CourseId(1), StudentId(1))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::Enrollment(_)));
    h.verify();
}

#[tokio::test]
async fn test_failed_promotion_keeps_the_dropped_enrollment() {
    let mut h = Harness::new();
    full_course_with_two_waiting(&mut h);
    h.enrollments
        .expect_action(EnrollmentId(2))
        .return_err(FrameworkError::ActorClosed);

    h.waitlist.expect_create().return_ok(WaitlistEntryId(4));
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::ReleaseSeat(1));
    h.courses
        .expect_action(CourseId(1))
        .return_ok(CourseActionResult::TryConsumeSeat(true));

    let err = h
        .registrar()
        .drop_course(CourseId(1), StudentId(1))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
    h.verify();
}
