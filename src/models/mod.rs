//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod checkin;
pub mod event;

// Re-export commonly used models
pub use checkin::{Checkin, CheckinSubmission, MembershipStatus};
pub use event::{CheckinWindowStatus, Event};
