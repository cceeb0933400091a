//! Membership evaluation
//!
//! A member is anyone with more than [`MEMBERSHIP_THRESHOLD`] check-ins. Every
//! record counts once; attendance mode and event are not weighted.

use crate::models::Checkin;

/// Number of check-ins a member must exceed to count as a member
pub const MEMBERSHIP_THRESHOLD: usize = 15;

/// Derive membership status from a member's check-ins
pub fn evaluate(checkins: &[Checkin]) -> bool {
    checkins.len() > MEMBERSHIP_THRESHOLD
}
