//! Event repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::store::EventSource;
use crate::models::Event;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventSource for EventRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, page_id, name, organization, location, event_start, event_end, form_open, form_close FROM events WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn find_by_page_id(&self, page_id: &str) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, page_id, name, organization, location, event_start, event_end, form_open, form_close FROM events WHERE page_id = $1"
        )
        .bind(page_id.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }
}
