//! Custom actions for the Course actor.

/// Seat-counter operations on a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAction {
    /// Reads the counter without modifying it.
    CheckSeats,
    /// Decrements the counter if it is above zero.
    ///
    /// Returns `false` and leaves the counter untouched when no seat is left.
    TryConsumeSeat,
    /// Increments the counter unconditionally.
    ReleaseSeat,
}

/// Results from CourseActions - variants match 1:1 with CourseAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseActionResult {
    CheckSeats(u32),
    TryConsumeSeat(bool),
    /// The counter after the release.
    ReleaseSeat(u32),
}
