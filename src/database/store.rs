//! Storage seams
//!
//! Handlers and services depend on these traits rather than on a concrete
//! pool, so the same flows run against Postgres or the in-memory store.

use async_trait::async_trait;

use crate::models::{Checkin, Event};
use crate::utils::errors::Result;

#[async_trait]
pub trait CheckinStore: Send + Sync {
    /// Check-in for the pair, if one exists
    async fn get(&self, member_id: &str, event_id: &str) -> Result<Option<Checkin>>;

    /// All check-ins recorded for a member
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Checkin>>;

    /// All check-ins recorded for an event
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Checkin>>;

    /// Record a check-in.
    ///
    /// Returns `Ok(None)` when the member is already checked in to the event.
    /// The existence check and the write are a single atomic step.
    async fn create(
        &self,
        member_id: &str,
        event_id: &str,
        is_in_person: bool,
    ) -> Result<Option<Checkin>>;

    /// Remove a check-in, returning the deleted record.
    ///
    /// Fails with [`PortalError::CheckinNotFound`](crate::PortalError::CheckinNotFound)
    /// when nothing is recorded for the pair.
    async fn delete(&self, member_id: &str, event_id: &str) -> Result<Checkin>;
}

/// Read-only access to events owned by the event-management side
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>>;

    /// Page ids are matched case-insensitively
    async fn find_by_page_id(&self, page_id: &str) -> Result<Option<Event>>;
}
