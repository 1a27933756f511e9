//! Course repository trait and implementation

use crate::error::Result;
use crate::models::{CourseId, NewCourse};
use async_trait::async_trait;
use sqlx::{query_as, PgPool};
use tracing::debug;

/// Course repository interface for catalog writes
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert the course, or refresh the existing row carrying the same code.
    ///
    /// # Returns
    /// The stable row id, whether the row was inserted or updated. Materials
    /// reference this id, so it must not change across re-imports.
    async fn upsert(&self, course: &NewCourse) -> Result<CourseId>;
}

/// PostgreSQL implementation of CourseRepository
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn upsert(&self, course: &NewCourse) -> Result<CourseId> {
        let (id,): (i64,) = query_as(
            r#"
            INSERT INTO courses (code, name, department, description)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (code) DO UPDATE SET
                name = excluded.name,
                department = excluded.department,
                description = excluded.description,
                updated_at = now()
            RETURNING id
            "#,
        )
        .bind(&course.code)
        .bind(&course.name)
        .bind(&course.department)
        .bind(&course.description)
        .fetch_one(&self.pool)
        .await?;

        debug!("Upserted course {} as row {}", course.code, id);
        Ok(CourseId(id))
    }
}
