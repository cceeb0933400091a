//! In-memory storage
//!
//! Used by tests and by deployments configured with `storage.backend = "memory"`.
//! Nothing here survives a restart.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::store::{CheckinStore, EventSource};
use crate::models::{Checkin, Event};
use crate::utils::errors::{PortalError, Result};

type CheckinKey = (String, String);

fn key(member_id: &str, event_id: &str) -> CheckinKey {
    (event_id.to_string(), member_id.to_string())
}

fn sorted(mut checkins: Vec<Checkin>) -> Vec<Checkin> {
    checkins.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    checkins
}

#[derive(Debug, Default)]
pub struct InMemoryCheckinStore {
    checkins: RwLock<HashMap<CheckinKey, Checkin>>,
}

impl InMemoryCheckinStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.checkins.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.checkins.read().await.is_empty()
    }
}

#[async_trait]
impl CheckinStore for InMemoryCheckinStore {
    async fn get(&self, member_id: &str, event_id: &str) -> Result<Option<Checkin>> {
        Ok(self
            .checkins
            .read()
            .await
            .get(&key(member_id, event_id))
            .cloned())
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Checkin>> {
        let checkins = self.checkins.read().await;
        Ok(sorted(
            checkins
                .values()
                .filter(|c| c.member_id == member_id)
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Checkin>> {
        let checkins = self.checkins.read().await;
        Ok(sorted(
            checkins
                .values()
                .filter(|c| c.event_id == event_id)
                .cloned()
                .collect(),
        ))
    }

    async fn create(
        &self,
        member_id: &str,
        event_id: &str,
        is_in_person: bool,
    ) -> Result<Option<Checkin>> {
        // Check and insert under one write lock.
        let mut checkins = self.checkins.write().await;
        match checkins.entry(key(member_id, event_id)) {
            Entry::Occupied(_) => Ok(None),
            Entry::Vacant(slot) => {
                let checkin = Checkin::new(member_id, event_id, is_in_person);
                slot.insert(checkin.clone());
                Ok(Some(checkin))
            }
        }
    }

    async fn delete(&self, member_id: &str, event_id: &str) -> Result<Checkin> {
        self.checkins
            .write()
            .await
            .remove(&key(member_id, event_id))
            .ok_or_else(|| PortalError::CheckinNotFound {
                member_id: member_id.to_string(),
                event_id: event_id.to_string(),
            })
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEventSource {
    events: RwLock<HashMap<String, Event>>,
}

impl InMemoryEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an event
    pub async fn insert(&self, event: Event) {
        self.events.write().await.insert(event.id.clone(), event);
    }
}

#[async_trait]
impl EventSource for InMemoryEventSource {
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>> {
        Ok(self.events.read().await.get(id).cloned())
    }

    async fn find_by_page_id(&self, page_id: &str) -> Result<Option<Event>> {
        let page_id = page_id.to_lowercase();
        Ok(self
            .events
            .read()
            .await
            .values()
            .find(|e| e.page_id == page_id)
            .cloned())
    }
}
