//! Material repository trait and implementation

use crate::error::Result;
use crate::models::NewMaterial;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{query, PgPool};
use tracing::debug;

/// Material repository interface for catalog writes
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// Insert the material, or refresh the existing row carrying the same
    /// external id. Re-importing an unchanged remote file must not create a
    /// second row.
    async fn upsert(&self, material: &NewMaterial) -> Result<()>;
}

/// PostgreSQL implementation of MaterialRepository
pub struct PgMaterialRepository {
    pool: PgPool,
}

impl PgMaterialRepository {
    /// Create a new PgMaterialRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaterialRepository for PgMaterialRepository {
    async fn upsert(&self, material: &NewMaterial) -> Result<()> {
        query(
            r#"
            INSERT INTO materials (
                course_id, title, material_type, semester, year,
                file_url, file_name, file_size, source, external_id, metadata
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (external_id) DO UPDATE SET
                course_id = excluded.course_id,
                title = excluded.title,
                material_type = excluded.material_type,
                semester = excluded.semester,
                year = excluded.year,
                file_url = excluded.file_url,
                file_name = excluded.file_name,
                file_size = excluded.file_size,
                source = excluded.source,
                metadata = excluded.metadata,
                updated_at = now()
            "#,
        )
        .bind(material.course_id)
        .bind(&material.title)
        .bind(&material.material_type)
        .bind(&material.semester)
        .bind(material.year)
        .bind(&material.file_url)
        .bind(&material.file_name)
        .bind(material.file_size)
        .bind(&material.source)
        .bind(&material.external_id)
        .bind(Json(&material.metadata))
        .execute(&self.pool)
        .await?;

        debug!(
            "Upserted material {} ({})",
            material.external_id, material.file_name
        );
        Ok(())
    }
}
