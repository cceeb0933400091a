//! Check-in service implementation
//!
//! This service handles check-in submission against an event's window,
//! member attendance history and membership status, and admin removal of
//! check-ins.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::database::DatabaseService;
use crate::models::{Checkin, CheckinSubmission, CheckinWindowStatus, Event, MembershipStatus};
use crate::services::{checkin_window, membership};
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging;

/// Result of a check-in submission that passed the window gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinOutcome {
    Recorded(Checkin),
    AlreadyCheckedIn,
}

/// Check-in service for attendance operations
#[derive(Clone)]
pub struct CheckinService {
    database: DatabaseService,
}

impl CheckinService {
    /// Create a new CheckinService instance
    pub fn new(database: DatabaseService) -> Self {
        Self { database }
    }

    /// Resolve an event by the page id used in check-in URLs
    pub async fn find_event(&self, page_id: &str) -> Result<Event> {
        self.database
            .events
            .find_by_page_id(page_id)
            .await?
            .ok_or_else(|| PortalError::EventNotFound {
                event_id: page_id.to_string(),
            })
    }

    /// Window status of an event at `now`
    pub async fn window_status(&self, page_id: &str, now: DateTime<Utc>) -> Result<CheckinWindowStatus> {
        let event = self.find_event(page_id).await?;
        let is_open = checkin_window::is_open(&event, now);

        Ok(CheckinWindowStatus {
            event_id: event.id,
            page_id: event.page_id,
            form_open: event.form_open,
            form_close: event.form_close,
            is_open,
        })
    }

    /// Submit a check-in for the event with `page_id`.
    ///
    /// `now` must be the current time of the request.
    pub async fn submit(
        &self,
        page_id: &str,
        submission: &CheckinSubmission,
        now: DateTime<Utc>,
    ) -> Result<CheckinOutcome> {
        let member_id = submission.member_id.trim();
        if member_id.is_empty() {
            return Err(PortalError::InvalidInput("member_id is required".to_string()));
        }

        let event = self.find_event(page_id).await?;
        if !checkin_window::is_open(&event, now) {
            debug!(event_id = %event.id, member_id = member_id, "Check-in window closed");
            return Err(PortalError::CheckinWindowClosed { event_id: event.id });
        }

        let mode = if submission.in_person { "in_person" } else { "remote" };
        match self
            .database
            .checkins
            .create(member_id, &event.id, submission.in_person)
            .await?
        {
            Some(checkin) => {
                logging::log_checkin_action(member_id, &event.id, "recorded", mode);
                Ok(CheckinOutcome::Recorded(checkin))
            }
            None => {
                logging::log_checkin_action(member_id, &event.id, "duplicate", mode);
                Ok(CheckinOutcome::AlreadyCheckedIn)
            }
        }
    }

    /// All check-ins of a member
    pub async fn member_checkins(&self, member_id: &str) -> Result<Vec<Checkin>> {
        debug!(member_id = member_id, "Listing member check-ins");
        self.database.checkins.list_by_member(member_id).await
    }

    /// Membership status derived from a member's check-in history
    pub async fn membership_status(&self, member_id: &str) -> Result<MembershipStatus> {
        let checkins = self.member_checkins(member_id).await?;

        Ok(MembershipStatus {
            member_id: member_id.to_string(),
            checkin_count: checkins.len(),
            is_member: membership::evaluate(&checkins),
        })
    }

    /// All check-ins recorded for an event id
    pub async fn event_checkins(&self, event_id: &str) -> Result<Vec<Checkin>> {
        if self.database.events.find_by_id(event_id).await?.is_none() {
            return Err(PortalError::EventNotFound {
                event_id: event_id.to_string(),
            });
        }

        debug!(event_id = event_id, "Listing event check-ins");
        self.database.checkins.list_by_event(event_id).await
    }

    /// Remove a member's check-in from an event
    pub async fn remove_checkin(&self, member_id: &str, event_id: &str) -> Result<Checkin> {
        let checkin = self.database.checkins.delete(member_id, event_id).await?;
        info!(member_id = member_id, event_id = event_id, "Check-in removed");
        logging::log_admin_action("delete_checkin", Some(event_id), Some(member_id));

        Ok(checkin)
    }
}
