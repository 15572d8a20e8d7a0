use sqlx::PgPool;

use crate::dto::activity::ActivityLogEntry;
use crate::error::Result;

/// Append-only audit trail.
pub struct ActivityLogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ActivityLogRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn record(
        &self,
        user_id: i32,
        action: &str,
        entity_type: Option<&str>,
        entity_id: Option<i32>,
        details: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO activity_logs (user_id, action, entity_type, entity_id, details)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(action)
        .bind(entity_type)
        .bind(entity_id)
        .bind(details)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<ActivityLogEntry>> {
        let entries = sqlx::query_as::<_, ActivityLogEntry>(
            r#"
            SELECT al.id, al.user_id, al.action, al.entity_type, al.entity_id,
                   al.details, al.created_at, u.username, u.display_name
            FROM activity_logs al
            JOIN users u ON al.user_id = u.id
            ORDER BY al.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}
