//! Check-in model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One attendance record. At most one exists per `(event_id, member_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Checkin {
    pub event_id: String,
    pub member_id: String,
    pub is_in_person: bool,
    pub created_at: DateTime<Utc>,
}

impl Checkin {
    pub fn new(
        member_id: impl Into<String>,
        event_id: impl Into<String>,
        is_in_person: bool,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            member_id: member_id.into(),
            is_in_person,
            created_at: Utc::now(),
        }
    }
}

/// Body of a check-in submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinSubmission {
    pub member_id: String,
    #[serde(default)]
    pub in_person: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipStatus {
    pub member_id: String,
    pub checkin_count: usize,
    pub is_member: bool,
}
