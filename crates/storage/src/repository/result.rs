use sqlx::PgPool;

use crate::dto::result::{
    CreateResultRequest, ResultDetail, ResultWithContext, UpdateResultRequest,
};
use crate::error::{Result, StorageError};
use crate::models::EventResult;

/// Repository for individual-event result operations
pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<EventResult> {
        let result = sqlx::query_as::<_, EventResult>(
            r#"
            SELECT id, event_id, department_id, participant_name, position,
                   score, match_id, updated_by, updated_at
            FROM results
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    /// Results of one event, podium order
    pub async fn list_for_event(&self, event_id: i32) -> Result<Vec<ResultDetail>> {
        let results = sqlx::query_as::<_, ResultDetail>(
            r#"
            SELECT r.id, r.event_id, r.department_id, r.participant_name,
                   r.position, r.score, r.match_id, r.updated_at,
                   d.name AS department_name, d.short_code
            FROM results r
            JOIN departments d ON r.department_id = d.id
            WHERE r.event_id = $1
            ORDER BY r.position ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// All results with event/sport context, newest edits first
    pub async fn list_with_context(&self) -> Result<Vec<ResultWithContext>> {
        let results = sqlx::query_as::<_, ResultWithContext>(
            r#"
            SELECT r.id, r.event_id, r.department_id, r.participant_name,
                   r.position, r.score, r.match_id, r.updated_at,
                   e.name AS event_name, s.name AS sport_name, e.category,
                   d.name AS dept_name, d.short_code AS dept_code
            FROM results r
            JOIN events e ON r.event_id = e.id
            JOIN sports s ON e.sport_id = s.id
            JOIN departments d ON r.department_id = d.id
            ORDER BY r.updated_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    pub async fn create(&self, req: &CreateResultRequest, updated_by: i32) -> Result<EventResult> {
        let result = sqlx::query_as::<_, EventResult>(
            r#"
            INSERT INTO results (event_id, department_id, participant_name, position, score, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, event_id, department_id, participant_name, position,
                      score, match_id, updated_by, updated_at
            "#,
        )
        .bind(req.event_id)
        .bind(req.department_id)
        .bind(&req.participant_name)
        .bind(req.position)
        .bind(&req.score)
        .bind(updated_by)
        .fetch_one(self.pool)
        .await
        .map_err(|e| Self::map_position_conflict(e, req.position))?;

        Ok(result)
    }

    pub async fn update(
        &self,
        id: i32,
        req: &UpdateResultRequest,
        updated_by: i32,
    ) -> Result<EventResult> {
        let result = sqlx::query_as::<_, EventResult>(
            r#"
            UPDATE results SET
                department_id = COALESCE($2, department_id),
                participant_name = COALESCE($3, participant_name),
                position = COALESCE($4, position),
                score = COALESCE($5, score),
                updated_by = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING id, event_id, department_id, participant_name, position,
                      score, match_id, updated_by, updated_at
            "#,
        )
        .bind(id)
        .bind(req.department_id)
        .bind(&req.participant_name)
        .bind(req.position)
        .bind(&req.score)
        .bind(updated_by)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| Self::map_position_conflict(e, req.position.unwrap_or(0)))?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM results WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count_for_event(&self, event_id: i32) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM results WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    fn map_position_conflict(e: sqlx::Error, position: i16) -> StorageError {
        let err = StorageError::from(e);
        if err.is_unique_violation() {
            StorageError::ConstraintViolation(format!(
                "Position {position} already assigned for this event"
            ))
        } else {
            err
        }
    }
}
