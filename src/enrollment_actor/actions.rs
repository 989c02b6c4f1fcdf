//! Custom actions for the Enrollment actor.

use crate::model::PaymentStatus;

/// Waitlist transitions on a single enrollment. Each returns the updated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentAction {
    /// WAITLISTED -> ALLOCATED. Clears the position and resets payment to pending.
    Promote,
    /// Sets the 1-based waitlist position.
    Rank(u32),
    /// ALLOCATED -> WAITLISTED. Reverses a promotion that could not be completed.
    Demote {
        position: u32,
        payment_status: PaymentStatus,
    },
}
