//! Check-in Portal
//!
//! Attendance tracking core for an organization's event portal.
//! This library records event check-ins, derives membership status from a
//! member's check-in history, gates submissions to each event's check-in window
//! and guards the admin area before any request reaches a handler.

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PortalError, Result};

// Re-export main components for easy access
pub use database::{CheckinStore, EventSource};
pub use middleware::AccessControl;
pub use server::{build_app, AppState};
pub use services::CheckinService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
