//! Middleware module
//!
//! This module contains middleware for request processing

pub mod access_control;

// Re-export commonly used middleware
pub use access_control::{access_control_middleware, AccessControl, AccessDecision, AdminCookies};
