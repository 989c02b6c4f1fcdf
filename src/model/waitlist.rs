use super::{CourseId, EnrollmentId, WaitlistEntryId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A queued claim on the next free seat of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: WaitlistEntryId,
    pub course_id: CourseId,
    pub enrollment_id: EnrollmentId,
    pub joined_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Queue order: join time first, then id, so equal timestamps keep insertion order.
    pub fn queue_key(&self) -> (DateTime<Utc>, WaitlistEntryId) {
        (self.joined_at, self.id)
    }
}

/// Sorts entries into queue order.
pub fn sort_queue(entries: &mut [WaitlistEntry]) {
    entries.sort_by_key(WaitlistEntry::queue_key);
}

/// Join time for a new entry behind `last`, the latest join time already queued.
///
/// Strictly after `last` even when the wall clock has stepped backwards, so a newcomer
/// never sorts ahead of anyone already waiting and a re-queued entry keeps its place.
pub fn next_join_time(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match last {
        Some(last) if now <= last => last + Duration::microseconds(1),
        _ => now,
    }
}

#[derive(Debug, Clone)]
pub struct WaitlistEntryCreate {
    pub course_id: CourseId,
    pub enrollment_id: EnrollmentId,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistFilter {
    ByCourse(CourseId),
    ByEnrollment(EnrollmentId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: u32, second: u32) -> WaitlistEntry {
        WaitlistEntry {
            id: WaitlistEntryId(id),
            course_id: CourseId(1),
            enrollment_id: EnrollmentId(id + 100),
            joined_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, second).unwrap(),
        }
    }

    #[test]
    fn test_sort_queue_orders_by_join_time() {
        let mut entries = vec![entry(1, 30), entry(2, 10), entry(3, 20)];
        sort_queue(&mut entries);
        let ids: Vec<u32> = entries.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_next_join_time_never_goes_backwards() {
        let last = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 10).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 5).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 20).unwrap();

        assert_eq!(next_join_time(None, earlier), earlier);
        assert_eq!(next_join_time(Some(last), later), later);
        assert!(next_join_time(Some(last), earlier) > last);
        assert!(next_join_time(Some(last), last) > last);
    }

    #[test]
    fn test_sort_queue_keeps_insertion_order_on_equal_timestamps() {
        let mut entries = vec![entry(4, 5), entry(2, 5), entry(9, 1), entry(3, 5)];
        sort_queue(&mut entries);
        let ids: Vec<u32> = entries.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![9, 2, 3, 4]);
    }
}
