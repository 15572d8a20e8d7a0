use sqlx::PgPool;

use crate::dto::medal::{MedalTallyEntry, WinnerEntry};
use crate::error::Result;

/// Read-only repository for medal aggregation queries.
///
/// Ranking order is applied afterwards by the tally service so the
/// tie-break rule lives in exactly one place.
pub struct MedalRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MedalRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Medal counts per department across all events, unranked
    pub async fn tally(&self) -> Result<Vec<MedalTallyEntry>> {
        let entries = sqlx::query_as::<_, MedalTallyEntry>(
            r#"
            SELECT
                d.id,
                d.name,
                d.short_code,
                COALESCE(SUM(CASE WHEN r.position = 1 THEN 1 ELSE 0 END), 0) AS gold,
                COALESCE(SUM(CASE WHEN r.position = 2 THEN 1 ELSE 0 END), 0) AS silver,
                COALESCE(SUM(CASE WHEN r.position = 3 THEN 1 ELSE 0 END), 0) AS bronze,
                COALESCE(SUM(CASE WHEN r.position IN (1, 2, 3) THEN 1 ELSE 0 END), 0) AS total
            FROM departments d
            LEFT JOIN results r ON d.id = r.department_id
            GROUP BY d.id, d.name, d.short_code
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Medal counts per department within one sport; departments without
    /// medals in that sport are omitted
    pub async fn tally_for_sport(&self, sport_id: i32) -> Result<Vec<MedalTallyEntry>> {
        let entries = sqlx::query_as::<_, MedalTallyEntry>(
            r#"
            SELECT
                d.id,
                d.name,
                d.short_code,
                COALESCE(SUM(CASE WHEN r.position = 1 THEN 1 ELSE 0 END), 0) AS gold,
                COALESCE(SUM(CASE WHEN r.position = 2 THEN 1 ELSE 0 END), 0) AS silver,
                COALESCE(SUM(CASE WHEN r.position = 3 THEN 1 ELSE 0 END), 0) AS bronze,
                COALESCE(SUM(CASE WHEN r.position IN (1, 2, 3) THEN 1 ELSE 0 END), 0) AS total
            FROM departments d
            JOIN results r ON d.id = r.department_id
            JOIN events e ON r.event_id = e.id
            WHERE e.sport_id = $1
            GROUP BY d.id, d.name, d.short_code
            HAVING COALESCE(SUM(CASE WHEN r.position IN (1, 2, 3) THEN 1 ELSE 0 END), 0) > 0
            "#,
        )
        .bind(sport_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Every medal with display metadata, podium order
    pub async fn winners(&self) -> Result<Vec<WinnerEntry>> {
        let winners = sqlx::query_as::<_, WinnerEntry>(
            r#"
            SELECT
                r.id,
                r.participant_name,
                r.position,
                r.score,
                d.short_code AS dept_code,
                d.name AS dept_name,
                e.name AS event_name,
                e.category,
                s.name AS sport_name,
                s.icon AS sport_icon
            FROM results r
            JOIN departments d ON r.department_id = d.id
            JOIN events e ON r.event_id = e.id
            JOIN sports s ON e.sport_id = s.id
            ORDER BY r.position ASC, s.name ASC, e.name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(winners)
    }
}
