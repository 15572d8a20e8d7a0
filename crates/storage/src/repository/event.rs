use sqlx::PgPool;

use crate::dto::event::{CreateEventRequest, EventWithSport};
use crate::error::{Result, StorageError};
use crate::models::{Event, EventType, ProgressStatus};

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, sport_id, name, category, event_type, status
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// List every event joined with its sport, for the organiser panel
    pub async fn list_with_sport(&self) -> Result<Vec<EventWithSport>> {
        let events = sqlx::query_as::<_, EventWithSport>(
            r#"
            SELECT e.id, e.sport_id, e.name, e.category, e.event_type, e.status,
                   s.name AS sport_name, s.day
            FROM events e
            JOIN sports s ON e.sport_id = s.id
            ORDER BY s.day, s.name, e.category, e.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn list_for_sport(&self, sport_id: i32) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, sport_id, name, category, event_type, status
            FROM events
            WHERE sport_id = $1
            ORDER BY category, id
            "#,
        )
        .bind(sport_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (sport_id, name, category, event_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, sport_id, name, category, event_type, status
            "#,
        )
        .bind(req.sport_id)
        .bind(&req.name)
        .bind(req.category)
        .bind(req.event_type.unwrap_or(EventType::Individual))
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    pub async fn set_status(&self, id: i32, status: ProgressStatus) -> Result<()> {
        let result = sqlx::query("UPDATE events SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
