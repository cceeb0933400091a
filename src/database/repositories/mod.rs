//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod checkin;
pub mod event;

// Re-export repositories
pub use checkin::CheckinRepository;
pub use event::EventRepository;
