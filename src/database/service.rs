//! Database service layer
//!
//! This module bundles the storage backends handed to services and handlers

use std::sync::Arc;

use crate::database::{
    CheckinRepository, CheckinStore, DatabasePool, EventRepository, EventSource,
    InMemoryCheckinStore, InMemoryEventSource,
};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct DatabaseService {
    pub checkins: Arc<dyn CheckinStore>,
    pub events: Arc<dyn EventSource>,
    pool: Option<DatabasePool>,
}

impl DatabaseService {
    /// Postgres-backed storage
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            checkins: Arc::new(CheckinRepository::new(pool.clone())),
            events: Arc::new(EventRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Storage over explicit backends; no pool to health-check
    pub fn from_stores(checkins: Arc<dyn CheckinStore>, events: Arc<dyn EventSource>) -> Self {
        Self {
            checkins,
            events,
            pool: None,
        }
    }

    /// Fresh, empty in-memory storage
    pub fn in_memory() -> Self {
        Self::from_stores(
            Arc::new(InMemoryCheckinStore::new()),
            Arc::new(InMemoryEventSource::new()),
        )
    }

    /// Check that the backing database answers, when there is one
    pub async fn health_check(&self) -> Result<()> {
        match &self.pool {
            Some(pool) => super::connection::health_check(pool).await,
            None => Ok(()),
        }
    }
}
