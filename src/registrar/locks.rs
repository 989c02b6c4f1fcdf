//! Per-key async locks for courses and students.

use crate::model::{CourseId, StudentId};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per key, created on first use and pruned once idle.
pub struct KeyedLocks<K> {
    table: Arc<Mutex<HashMap<K, Arc<Mutex<()>>>>>,
}

/// Holding a course's guard serializes every seat, ledger and queue change for that
/// course; guards for different courses never contend.
pub type CourseLocks = KeyedLocks<CourseId>;

/// Holding a student's guard serializes enrollment creation against deregistration.
///
/// Always taken before any course lock.
pub type StudentLocks = KeyedLocks<StudentId>;

impl<K> Clone for KeyedLocks<K> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K> Default for KeyedLocks<K> {
    fn default() -> Self {
        Self {
            table: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K: Copy + Eq + Hash> KeyedLocks<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `key`. Access ends when the guard is dropped.
    pub async fn lock(&self, key: K) -> OwnedMutexGuard<()> {
        let lock = {
            let mut table = self.table.lock().await;
            // Only the table holds an idle lock: nobody owns or awaits it.
            table.retain(|_, lock| Arc::strong_count(lock) > 1);
            table.entry(key).or_default().clone()
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.table.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_same_course_waits_for_release() {
        let locks = CourseLocks::new();
        let guard = locks.lock(CourseId(1)).await;

        let blocked = timeout(Duration::from_millis(50), locks.lock(CourseId(1))).await;
        assert!(blocked.is_err());

        drop(guard);
        let acquired = timeout(Duration::from_millis(50), locks.lock(CourseId(1))).await;
        assert!(acquired.is_ok());
    }

    #[tokio::test]
    async fn test_different_courses_do_not_contend() {
        let locks = CourseLocks::new();
        let _first = locks.lock(CourseId(1)).await;

        let other = timeout(Duration::from_millis(50), locks.lock(CourseId(2))).await;
        assert!(other.is_ok());
    }

    #[tokio::test]
    async fn test_idle_locks_are_pruned() {
        let locks = CourseLocks::new();
        for id in 1..=100 {
            drop(locks.lock(CourseId(id)).await);
        }
        // The last key is still in the table until the next lock call sweeps it.
        assert_eq!(locks.tracked().await, 1);

        let held = locks.lock(CourseId(500)).await;
        let _other = locks.lock(CourseId(501)).await;
        assert_eq!(locks.tracked().await, 2);

        drop(held);
        drop(locks.lock(CourseId(502)).await);
        assert_eq!(locks.tracked().await, 2);
    }

    #[tokio::test]
    async fn test_held_lock_survives_a_sweep() {
        let locks = StudentLocks::new();
        let guard = locks.lock(StudentId(1)).await;

        drop(locks.lock(StudentId(2)).await);
        let blocked = timeout(Duration::from_millis(50), locks.lock(StudentId(1))).await;
        assert!(blocked.is_err());

        drop(guard);
        assert!(timeout(Duration::from_millis(50), locks.lock(StudentId(1)))
            .await
            .is_ok());
    }
}
