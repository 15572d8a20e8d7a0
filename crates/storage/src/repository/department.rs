use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Department;

/// Repository for Department database operations
pub struct DepartmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Department>> {
        let departments = sqlx::query_as::<_, Department>(
            "SELECT id, name, short_code FROM departments ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(departments)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Department> {
        let department = sqlx::query_as::<_, Department>(
            "SELECT id, name, short_code FROM departments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(department)
    }

    pub async fn create(&self, name: &str, short_code: &str) -> Result<Department> {
        let department = sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO departments (name, short_code)
            VALUES ($1, $2)
            RETURNING id, name, short_code
            "#,
        )
        .bind(name)
        .bind(short_code)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation(
                    "Department name or short code already exists".to_string(),
                )
            } else {
                err
            }
        })?;

        Ok(department)
    }

    pub async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        short_code: Option<&str>,
    ) -> Result<Department> {
        let department = sqlx::query_as::<_, Department>(
            r#"
            UPDATE departments SET
                name = COALESCE($2, name),
                short_code = COALESCE($3, short_code)
            WHERE id = $1
            RETURNING id, name, short_code
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(short_code)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(department)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
