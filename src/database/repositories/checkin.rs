//! Check-in repository implementation

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::database::store::CheckinStore;
use crate::models::Checkin;
use crate::utils::errors::{PortalError, Result};

#[derive(Debug, Clone)]
pub struct CheckinRepository {
    pool: PgPool,
}

impl CheckinRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckinStore for CheckinRepository {
    async fn get(&self, member_id: &str, event_id: &str) -> Result<Option<Checkin>> {
        let checkin = sqlx::query_as::<_, Checkin>(
            "SELECT event_id, member_id, is_in_person, created_at FROM checkins WHERE event_id = $1 AND member_id = $2"
        )
        .bind(event_id)
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(checkin)
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Checkin>> {
        let checkins = sqlx::query_as::<_, Checkin>(
            "SELECT event_id, member_id, is_in_person, created_at FROM checkins WHERE member_id = $1 ORDER BY created_at ASC"
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(checkins)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Checkin>> {
        let checkins = sqlx::query_as::<_, Checkin>(
            "SELECT event_id, member_id, is_in_person, created_at FROM checkins WHERE event_id = $1 ORDER BY created_at ASC"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(checkins)
    }

    async fn create(
        &self,
        member_id: &str,
        event_id: &str,
        is_in_person: bool,
    ) -> Result<Option<Checkin>> {
        // The primary key on (event_id, member_id) arbitrates concurrent
        // submissions; a conflicting insert returns no row.
        let checkin = sqlx::query_as::<_, Checkin>(
            r#"
            INSERT INTO checkins (event_id, member_id, is_in_person, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (event_id, member_id) DO NOTHING
            RETURNING event_id, member_id, is_in_person, created_at
            "#
        )
        .bind(event_id)
        .bind(member_id)
        .bind(is_in_person)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(checkin)
    }

    async fn delete(&self, member_id: &str, event_id: &str) -> Result<Checkin> {
        let checkin = sqlx::query_as::<_, Checkin>(
            r#"
            DELETE FROM checkins
            WHERE event_id = $1 AND member_id = $2
            RETURNING event_id, member_id, is_in_person, created_at
            "#
        )
        .bind(event_id)
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await?;

        checkin.ok_or_else(|| PortalError::CheckinNotFound {
            member_id: member_id.to_string(),
            event_id: event_id.to_string(),
        })
    }
}
