//! Plain data types shared by the actors, the clients and the registrar.
//!
//! Each record is stored by its own [`ResourceActor`](actor_framework::ResourceActor); records
//! refer to each other only through the id newtypes defined here, never by ownership.

mod course;
mod enrollment;
mod student;
mod waitlist;

pub use course::*;
pub use enrollment::*;
pub use student::*;
pub use waitlist::*;

/// Declares a `u32` id newtype that prints as `<prefix>_<n>`.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies a registered student.
    StudentId,
    "student"
);
entity_id!(
    /// Identifies a course in the catalog.
    CourseId,
    "course"
);
entity_id!(
    /// Identifies one student/course enrollment record.
    EnrollmentId,
    "enrollment"
);
entity_id!(
    /// Identifies a queued waitlist entry.
    WaitlistEntryId,
    "waitlist"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_with_prefix() {
        assert_eq!(StudentId(3).to_string(), "student_3");
        assert_eq!(CourseId(1).to_string(), "course_1");
        assert_eq!(EnrollmentId(12).to_string(), "enrollment_12");
        assert_eq!(WaitlistEntryId(7).to_string(), "waitlist_7");
    }

    #[test]
    fn test_ids_order_numerically() {
        let mut ids = vec![CourseId(10), CourseId(2), CourseId(33)];
        ids.sort();
        assert_eq!(ids, vec![CourseId(2), CourseId(10), CourseId(33)]);
    }
}
