//! Event model
//!
//! Events are owned by the event-management side of the portal; this crate
//! only reads them to resolve page ids and check-in windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: String,
    pub page_id: String,
    pub name: String,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub event_start: DateTime<Utc>,
    pub event_end: DateTime<Utc>,
    pub form_open: DateTime<Utc>,
    pub form_close: DateTime<Utc>,
}

/// Check-in window of an event as seen at a given instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinWindowStatus {
    pub event_id: String,
    pub page_id: String,
    pub form_open: DateTime<Utc>,
    pub form_close: DateTime<Utc>,
    pub is_open: bool,
}
