use sqlx::PgPool;

use crate::dto::matches::{MatchDetail, MatchRow};
use crate::error::{Result, StorageError};
use crate::models::Match;

const MATCH_COLUMNS: &str = "id, event_id, team1_department_id, team2_department_id, \
     team1_name, team2_name, team1_score, team2_score, \
     winner_department_id, round, status, updated_by, updated_at";

/// Repository for bracket match operations
pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Match> {
        let found = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(found)
    }

    /// Matches of one event with display names, later rounds first
    pub async fn list_for_event(&self, event_id: i32) -> Result<Vec<MatchDetail>> {
        let rows = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT m.id, m.event_id, m.team1_department_id, m.team2_department_id,
                   m.team1_name, m.team2_name, m.team1_score, m.team2_score,
                   m.winner_department_id, m.round, m.status, m.updated_at,
                   d1.name AS team1_department_name, d1.short_code AS team1_code,
                   d2.name AS team2_department_name, d2.short_code AS team2_code,
                   w.name AS winner_name, w.short_code AS winner_code,
                   NULL::text AS event_name, NULL::text AS sport_name
            FROM matches m
            JOIN departments d1 ON m.team1_department_id = d1.id
            LEFT JOIN departments d2 ON m.team2_department_id = d2.id
            LEFT JOIN departments w ON m.winner_department_id = w.id
            WHERE m.event_id = $1
            ORDER BY m.round DESC, m.id DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(MatchDetail::from).collect())
    }

    /// Every match with event and sport context, for the organiser panel
    pub async fn list_with_context(&self) -> Result<Vec<MatchDetail>> {
        let rows = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT m.id, m.event_id, m.team1_department_id, m.team2_department_id,
                   m.team1_name, m.team2_name, m.team1_score, m.team2_score,
                   m.winner_department_id, m.round, m.status, m.updated_at,
                   d1.name AS team1_department_name, d1.short_code AS team1_code,
                   d2.name AS team2_department_name, d2.short_code AS team2_code,
                   w.name AS winner_name, w.short_code AS winner_code,
                   e.name AS event_name, s.name AS sport_name
            FROM matches m
            JOIN events e ON m.event_id = e.id
            JOIN sports s ON e.sport_id = s.id
            JOIN departments d1 ON m.team1_department_id = d1.id
            LEFT JOIN departments d2 ON m.team2_department_id = d2.id
            LEFT JOIN departments w ON m.winner_department_id = w.id
            ORDER BY s.name ASC, m.status, m.id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(MatchDetail::from).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
