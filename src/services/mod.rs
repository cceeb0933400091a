//! Services module
//!
//! This module contains business logic services

pub mod checkin;
pub mod checkin_window;
pub mod membership;

// Re-export commonly used services
pub use checkin::{CheckinOutcome, CheckinService};
pub use membership::MEMBERSHIP_THRESHOLD;
