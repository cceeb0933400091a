//! HTTP handlers module
//!
//! This module contains the JSON endpoints served behind the access-control
//! middleware

pub mod admin;
pub mod events;
pub mod health;
pub mod members;

pub use admin::{delete_checkin, list_event_checkins, login_view};
pub use events::{get_checkin_window, submit_checkin};
pub use health::health_handler;
pub use members::{get_membership_status, list_member_checkins};
