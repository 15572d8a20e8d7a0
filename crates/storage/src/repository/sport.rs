use sqlx::PgPool;

use crate::dto::sport::{CreateSportRequest, SportWithCounts, UpdateSportRequest};
use crate::error::{Result, StorageError};
use crate::models::{RoundSet, Sport};

/// Repository for Sport database operations
pub struct SportRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SportRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all sports with per-status event counts
    pub async fn list_with_counts(&self) -> Result<Vec<SportWithCounts>> {
        let sports = sqlx::query_as::<_, SportWithCounts>(
            r#"
            SELECT
                s.id, s.name, s.day, s.icon, s.fixtures_visible, s.visible_rounds,
                (SELECT COUNT(*) FROM events e WHERE e.sport_id = s.id AND e.status = 'live') AS live_events,
                (SELECT COUNT(*) FROM events e WHERE e.sport_id = s.id AND e.status = 'completed') AS completed_events,
                (SELECT COUNT(*) FROM events e WHERE e.sport_id = s.id) AS total_events
            FROM sports s
            ORDER BY s.day, s.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(sports)
    }

    /// List all sports without event counts
    pub async fn list(&self) -> Result<Vec<Sport>> {
        let sports = sqlx::query_as::<_, Sport>(
            r#"
            SELECT id, name, day, icon, fixtures_visible, visible_rounds
            FROM sports
            ORDER BY day, name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(sports)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Sport> {
        let sport = sqlx::query_as::<_, Sport>(
            r#"
            SELECT id, name, day, icon, fixtures_visible, visible_rounds
            FROM sports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(sport)
    }

    pub async fn create(&self, req: &CreateSportRequest) -> Result<Sport> {
        let sport = sqlx::query_as::<_, Sport>(
            r#"
            INSERT INTO sports (name, day, icon)
            VALUES ($1, $2, COALESCE($3, '🏆'))
            RETURNING id, name, day, icon, fixtures_visible, visible_rounds
            "#,
        )
        .bind(&req.name)
        .bind(req.day)
        .bind(&req.icon)
        .fetch_one(self.pool)
        .await?;

        Ok(sport)
    }

    pub async fn update(&self, id: i32, req: &UpdateSportRequest) -> Result<Sport> {
        let sport = sqlx::query_as::<_, Sport>(
            r#"
            UPDATE sports SET
                name = COALESCE($2, name),
                day = COALESCE($3, day),
                icon = COALESCE($4, icon)
            WHERE id = $1
            RETURNING id, name, day, icon, fixtures_visible, visible_rounds
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.day)
        .bind(&req.icon)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(sport)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM sports WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn set_fixtures_visible(&self, id: i32, visible: bool) -> Result<()> {
        sqlx::query("UPDATE sports SET fixtures_visible = $2 WHERE id = $1")
            .bind(id)
            .bind(visible)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    pub async fn set_visible_rounds(&self, id: i32, rounds: &RoundSet) -> Result<()> {
        sqlx::query("UPDATE sports SET visible_rounds = $2 WHERE id = $1")
            .bind(id)
            .bind(rounds.to_csv())
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
